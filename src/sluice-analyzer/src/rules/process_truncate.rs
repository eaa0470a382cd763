//! DELETE to TRUNCATE rewrite and TRUNCATE validation.
//!
//! `DELETE FROM t` without a `WHERE` clause empties the table just like
//! `TRUNCATE t`, which drops the data wholesale instead of row by row. The
//! two are only interchangeable when nothing observes the difference:
//!
//! - an auto-increment counter is reset by TRUNCATE but not by DELETE
//! - `ON DELETE` triggers do not fire for TRUNCATE
//! - TRUNCATE is refused for a table referenced by a foreign key
//!
//! When any of these cannot be ruled out the DELETE is kept.

use std::sync::Arc;

use common_error::{SluiceError, SluiceResult};
use log::{debug, trace};
use sluice_catalog::{Catalog, Database, TriggerEvent, TriggerSource};
use sluice_core::eq_ignore_case;
use sluice_plan::{DeleteFrom, PlanNode, ResolvedTable, get_truncatable};

use super::rule::{AnalyzerRule, Transformed};
use crate::Session;

/// Outcome of checking whether a table may be truncated.
#[derive(Debug)]
pub enum TruncateCheck {
    /// TRUNCATE does not apply to this node or table. A DELETE stays a
    /// DELETE; an explicit TRUNCATE fails with the carried error.
    NotApplicable(SluiceError),
    /// The table can be truncated.
    Valid,
    /// Metadata needed for the decision could not be read.
    Invalid(SluiceError),
}

impl TruncateCheck {
    /// Check if the table can be truncated.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Turn every outcome other than [`TruncateCheck::Valid`] into its error.
    pub fn into_result(self) -> SluiceResult<()> {
        match self {
            Self::Valid => Ok(()),
            Self::NotApplicable(err) | Self::Invalid(err) => Err(err),
        }
    }
}

/// Validates `TRUNCATE` statements and turns unconditional `DELETE`
/// statements into `TRUNCATE` where that is unobservable.
///
/// The rewrite does not check for table locks held by other sessions.
pub struct ProcessTruncate {
    catalog: Arc<dyn Catalog>,
    triggers: Arc<dyn TriggerSource>,
    rewrite_delete: bool,
}

impl ProcessTruncate {
    /// Create the rule over a catalog and the source of its triggers.
    pub fn new(catalog: Arc<dyn Catalog>, triggers: Arc<dyn TriggerSource>) -> Self {
        Self {
            catalog,
            triggers,
            rewrite_delete: true,
        }
    }

    /// Enable or disable the DELETE rewrite. TRUNCATE validation always runs.
    #[must_use]
    pub fn with_delete_rewrite(mut self, enable: bool) -> Self {
        self.rewrite_delete = enable;
        self
    }

    /// Rewrite `delete` into a TRUNCATE if that is safe.
    fn delete_to_truncate(&self, session: &Session, delete: DeleteFrom) -> SluiceResult<Transformed> {
        let Some(database) = self.rewrite_target(session, delete.child())? else {
            return Ok(Transformed::no(PlanNode::DeleteFrom(delete)));
        };

        debug!("Rewriting DELETE into TRUNCATE in database {database}");
        Ok(Transformed::yes(PlanNode::truncate(
            Some(database),
            *delete.child,
        )))
    }

    /// The database a DELETE over `node` can be truncated in, or `None` when
    /// the DELETE must stay.
    fn rewrite_target(&self, session: &Session, node: &PlanNode) -> SluiceResult<Option<String>> {
        let PlanNode::ResolvedTable(table) = node else {
            trace!("Keeping DELETE: target is a {}, not a table", node.name());
            return Ok(None);
        };

        if let Some(column) = table.schema.auto_increment_column() {
            debug!(
                "Keeping DELETE on {}: auto-increment column {}",
                table.name, column.name
            );
            return Ok(None);
        }

        let Some(database) = self.owning_database(table)? else {
            return Ok(None);
        };

        if self.has_delete_trigger(table, database.name())? {
            return Ok(None);
        }

        match self.validate_truncate(session, Some(database.name()), node) {
            TruncateCheck::Valid => Ok(Some(database.name().to_string())),
            TruncateCheck::NotApplicable(reason) => {
                debug!("Keeping DELETE on {}: {reason}", table.name);
                Ok(None)
            }
            TruncateCheck::Invalid(err) => Err(err),
        }
    }

    /// The only database containing `table`, or `None` if there is no such
    /// database or more than one.
    fn owning_database(&self, table: &ResolvedTable) -> SluiceResult<Option<Arc<dyn Database>>> {
        let mut owner: Option<Arc<dyn Database>> = None;

        for database in self.catalog.all_databases() {
            let hits = database
                .table_names()?
                .iter()
                .filter(|name| eq_ignore_case(name, &table.name))
                .count();
            if hits == 0 {
                continue;
            }
            if owner.is_some() || hits > 1 {
                debug!("Keeping DELETE on {}: table name is ambiguous", table.name);
                return Ok(None);
            }
            owner = Some(database);
        }

        if owner.is_none() {
            debug!("Keeping DELETE on {}: no database contains it", table.name);
        }
        Ok(owner)
    }

    /// Check whether a delete trigger may fire on `table` in `database`.
    ///
    /// A delete trigger whose target cannot be named counts as a match.
    fn has_delete_trigger(&self, table: &ResolvedTable, database: &str) -> SluiceResult<bool> {
        for defined_in in self.catalog.all_databases() {
            for trigger in self.triggers.triggers(defined_in.as_ref())? {
                if !trigger.fires_on(TriggerEvent::Delete) {
                    continue;
                }

                let PlanNode::UnresolvedTable(target) = &trigger.table else {
                    debug!(
                        "Keeping DELETE on {}: target of trigger {} is unknown",
                        table.name, trigger.name
                    );
                    return Ok(true);
                };

                let same_database = match target.database.as_deref().filter(|db| !db.is_empty()) {
                    Some(qualifier) => eq_ignore_case(qualifier, database),
                    None => eq_ignore_case(defined_in.name(), database),
                };
                if same_database && eq_ignore_case(&target.name, &table.name) {
                    debug!(
                        "Keeping DELETE on {}: delete trigger {}",
                        table.name, trigger.name
                    );
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Check whether `node` can be truncated in `database`.
    ///
    /// `None` or an empty name means the session's current database. Only
    /// tables in that database are searched for foreign keys.
    pub fn validate_truncate(
        &self,
        session: &Session,
        database: Option<&str>,
        node: &PlanNode,
    ) -> TruncateCheck {
        let target = match get_truncatable(node) {
            Ok(target) => target.table_name().to_lowercase(),
            Err(err) => return TruncateCheck::NotApplicable(err),
        };
        let database = database
            .filter(|db| !db.is_empty())
            .unwrap_or_else(|| session.current_database());

        match self.find_referencing_key(database, &target) {
            Ok(None) => TruncateCheck::Valid,
            Ok(Some(err)) => TruncateCheck::NotApplicable(err),
            Err(err) => TruncateCheck::Invalid(err),
        }
    }

    /// Find a foreign key in `database` that references `target`, returned as
    /// the error TRUNCATE reports for it.
    fn find_referencing_key(&self, database: &str, target: &str) -> SluiceResult<Option<SluiceError>> {
        for db in self.catalog.all_databases() {
            if !eq_ignore_case(db.name(), database) {
                continue;
            }

            for name in db.table_names()? {
                if eq_ignore_case(&name, target) {
                    continue;
                }

                let table = db
                    .get_table_insensitive(&name)?
                    .ok_or_else(|| SluiceError::table_not_found(&name))?;
                let Some(fk_table) = table.as_foreign_key_table() else {
                    continue;
                };

                if let Some(fk) = fk_table.foreign_keys()?.iter().find(|fk| fk.references(target)) {
                    return Ok(Some(SluiceError::truncate_referenced(target, &fk.name, &name)));
                }
            }
        }

        Ok(None)
    }
}

impl AnalyzerRule for ProcessTruncate {
    fn name(&self) -> &'static str {
        "ProcessTruncate"
    }

    fn description(&self) -> &'static str {
        "Validates TRUNCATE and rewrites unconditional DELETE into TRUNCATE"
    }

    fn apply(&self, session: &Session, plan: PlanNode) -> SluiceResult<Transformed> {
        match plan {
            PlanNode::DeleteFrom(delete) if self.rewrite_delete => {
                self.delete_to_truncate(session, delete)
            }
            PlanNode::Truncate(truncate) => {
                self.validate_truncate(session, truncate.database_name(), truncate.child())
                    .into_result()?;
                Ok(Transformed::no(PlanNode::Truncate(truncate)))
            }
            other => Ok(Transformed::no(other)),
        }
    }
}
