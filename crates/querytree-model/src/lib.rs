//! Query-tree data model for planner diagnostics.
//!
//! Mirrors the shape a SQL planner hands to an instrumentation hook: one
//! [`Query`] aggregate per statement level, referencing a closed set of
//! [`Node`] kinds. Trees are built by the host and only ever read here;
//! nothing in this crate mutates or takes ownership of them.
//!
//! [`codes`] holds the total decoders from raw planner codes (relation
//! kind, range-table-entry kind, lock mode, join type, boolean operator)
//! to descriptive names.

pub mod codes;
pub mod node;

pub use node::{
    Alias, AttrNumber, BoolExpr, Const, FromExpr, Index, JoinExpr, Node, Oid, OpExpr, Query,
    RangeTblEntry, RangeTblRef, SortGroupClause, StrVal, TargetEntry, Var, WindowClause,
    WindowFunc,
};
