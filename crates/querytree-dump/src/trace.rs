//! Log-stream rendering of range tables.
//!
//! The document dump's predecessor emitted one log line per range-table
//! entry. Hosts that want plan summaries interleaved with their ordinary
//! log stream still get that here, as structured `tracing` events.

use querytree_model::Query;
use querytree_model::codes::{rel_kind_str, rte_kind_str};
use tracing::info;

use crate::namelist::join_names;

/// Byte budget for the per-entry column-name summary.
const COLNAME_SUMMARY_CAPACITY: usize = 64;

/// Emit one structured log event per range-table entry of `query`.
///
/// Positions are reported 1-based, matching how the rest of the tree
/// refers into the range table.
pub fn log_range_table(query: &Query) {
    for (position, rte) in query.rtable.iter().enumerate() {
        let alias = rte
            .alias
            .as_ref()
            .map(|alias| alias.aliasname.as_str())
            .unwrap_or("");
        let colnames = match &rte.alias {
            Some(alias) => join_names(
                alias.colnames.iter().map(String::as_str),
                COLNAME_SUMMARY_CAPACITY,
            ),
            None => join_names(std::iter::empty(), COLNAME_SUMMARY_CAPACITY),
        };

        info!(
            target: "querytree",
            rtindex = position + 1,
            alias,
            relid = rte.relid,
            relkind = %rte.relkind,
            relkind_str = rel_kind_str(rte.relkind),
            rtekind = rte.rtekind,
            rtekind_str = rte_kind_str(rte.rtekind),
            colnames = colnames.text.as_str(),
            colnames_clipped = colnames.truncated,
            "range table entry"
        );
    }
}
