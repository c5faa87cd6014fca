use super::{Constraint, Schema, Table};
use crate::Result;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify_foreign_keys(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for table in &self.schema.tables {
            for constraint in table.get_constraints().unwrap_or_default() {
                if constraint.is_foreign_key() {
                    self.verify_foreign_key_target(table, constraint)?;
                }
            }
        }

        Ok(())
    }

    fn verify_foreign_key_target(&self, table: &Table, fk: &Constraint) -> Result<()> {
        let Ok(target) = self.schema.get_table(&fk.reference_table) else {
            return Err(fk.invalid(format!(
                "table `{}` references table `{}`, which is not in the schema",
                table.name(),
                fk.reference_table
            )));
        };

        // No explicit reference fields means the target's primary key.
        if fk.reference_fields.is_empty() {
            if target.primary_key().is_err() {
                return Err(fk.invalid(format!(
                    "no reference fields given and table `{}` has no primary key",
                    target.name()
                )));
            }
            return Ok(());
        }

        for field in &fk.reference_fields {
            if !target.has_field(field) {
                return Err(fk.invalid(format!(
                    "referenced field `{field}` does not exist in table `{}`",
                    target.name()
                )));
            }
        }

        Ok(())
    }
}
