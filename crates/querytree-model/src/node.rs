//! Query-tree node definitions.
//!
//! One [`Node`] variant per supported kind, plus [`Node::Unrecognized`] for
//! anything outside the known set. Single children are `Option<Box<Node>>`
//! so an absent reference is explicit; ordered children are plain `Vec`s
//! whose order is meaningful (positional index fields elsewhere in the tree
//! refer into them).

/// Catalog object identifier.
pub type Oid = u32;

/// 1-based position into the enclosing range table.
pub type Index = u32;

/// Attribute (column) number within a relation.
pub type AttrNumber = i16;

/// One element of the query tree.
///
/// The set of kinds is closed: every variant has exactly one encoder in the
/// dump crate, and anything else travels as [`Node::Unrecognized`] carrying
/// its raw tag so unsupported structures degrade instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Alias(Alias),
    Str(StrVal),
    RangeTblEntry(RangeTblEntry),
    FromExpr(FromExpr),
    RangeTblRef(RangeTblRef),
    JoinExpr(JoinExpr),
    BoolExpr(BoolExpr),
    OpExpr(OpExpr),
    Var(Var),
    Const(Const),
    TargetEntry(TargetEntry),
    SortGroupClause(SortGroupClause),
    WindowFunc(WindowFunc),
    WindowClause(WindowClause),
    /// A kind this library does not know, identified by its raw tag value.
    Unrecognized(u32),
}

/// Table or column-list alias.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alias {
    pub aliasname: String,
    /// Column names, in declaration order.
    pub colnames: Vec<String>,
}

/// A bare name literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrVal {
    pub sval: String,
}

/// One entry of a query's range table: a base relation, a sub-query, a
/// join, a function call, and so on, discriminated by `rtekind`.
///
/// The code fields (`relkind`, `rtekind`, `jointype`, `rellockmode`) are
/// opaque planner codes; [`crate::codes`] decodes them to names. `subquery`
/// is only meaningful when `rtekind` is [`crate::codes::rte_kind::SUBQUERY`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeTblEntry {
    /// User-written alias, if any.
    pub alias: Option<Alias>,
    /// Expansion alias: the names the entry's columns actually go by.
    pub eref: Option<Alias>,
    pub relid: Oid,
    /// Relation storage kind code (a single character).
    pub relkind: char,
    /// Entry kind code.
    pub rtekind: i32,
    /// Whether the entry appears in the from-clause.
    pub in_from_clause: bool,
    pub jointype: i32,
    /// Number of columns merged away by a USING/NATURAL join.
    pub joinmergedcols: i32,
    pub lateral: bool,
    pub inh: bool,
    /// Name of an ephemeral named relation, if the entry is one.
    pub enrname: Option<String>,
    pub rellockmode: i32,
    pub security_barrier: bool,
    /// Nested statement for sub-query entries.
    pub subquery: Option<Box<Query>>,
}

/// The join tree of one query level: which range-table entries combine,
/// and under what qualifying condition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FromExpr {
    pub fromlist: Vec<Node>,
    pub quals: Option<Box<Node>>,
}

/// Leaf of the join tree: a 1-based reference into the range table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeTblRef {
    pub rtindex: Index,
}

/// An explicit join between two sub-trees of the join tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinExpr {
    pub jointype: i32,
    pub is_natural: bool,
    pub larg: Option<Box<Node>>,
    pub rarg: Option<Box<Node>>,
    /// Column names of a USING clause, in written order.
    pub using_clause: Vec<String>,
    pub join_using_alias: Option<Alias>,
    pub quals: Option<Box<Node>>,
    pub alias: Option<Alias>,
    /// Range-table position assigned to the join result.
    pub rtindex: Index,
}

/// AND/OR/NOT over a list of operand expressions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoolExpr {
    pub boolop: i32,
    pub args: Vec<Node>,
    pub location: i32,
}

/// An operator invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpExpr {
    pub opno: Oid,
    pub opfuncid: Oid,
    pub opresulttype: Oid,
    pub opretset: bool,
    pub opcollid: Oid,
    pub inputcollid: Oid,
    pub args: Vec<Node>,
    pub location: i32,
}

/// A column reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Var {
    /// Range-table position of the referenced entry.
    pub varno: Index,
    pub varattno: AttrNumber,
    pub vartype: Oid,
    pub vartypmod: i32,
    pub varcollid: Oid,
    /// How many query levels up the referenced range table sits.
    pub varlevelsup: Index,
    /// Attribute number as written, before join column merging.
    pub varattnosyn: AttrNumber,
    pub location: i32,
}

/// A literal constant. The value itself is not carried; only the metadata
/// a diagnostic reader needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Const {
    pub consttype: Oid,
    pub consttypmod: i32,
    pub constcollid: Oid,
    pub constlen: i32,
    pub constisnull: bool,
    pub constbyval: bool,
    pub location: i32,
}

/// One output column of a query level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetEntry {
    pub expr: Option<Box<Node>>,
    /// 1-based result position.
    pub resno: AttrNumber,
    pub resname: Option<String>,
    /// Non-zero when sort/group clauses refer to this entry.
    pub ressortgroupref: Index,
    pub resorigtbl: Oid,
    pub resorigcol: AttrNumber,
    /// True for working columns that are not part of the final output.
    pub resjunk: bool,
}

/// One element of a sort or group clause, referring to a target entry by
/// its `ressortgroupref` tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortGroupClause {
    pub tle_sortgroupref: Index,
    pub eqop: Oid,
    pub sortop: Oid,
    pub nulls_first: bool,
    pub hashable: bool,
}

/// A window function call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowFunc {
    pub winfnoid: Oid,
    pub wintype: Oid,
    pub wincollid: Oid,
    pub inputcollid: Oid,
    pub args: Vec<Node>,
    pub aggfilter: Option<Box<Node>>,
    /// Tag of the window clause this call runs over.
    pub winref: Index,
    pub winstar: bool,
    pub winagg: bool,
    pub location: i32,
}

/// A window definition: partitioning, ordering and framing for the window
/// function calls that reference it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowClause {
    pub name: Option<String>,
    pub refname: Option<String>,
    pub partition_clause: Vec<Node>,
    pub order_clause: Vec<Node>,
    pub frame_options: i32,
    pub start_offset: Option<Box<Node>>,
    pub end_offset: Option<Box<Node>>,
    pub run_condition: Vec<Node>,
    pub start_in_range_func: Oid,
    pub end_in_range_func: Oid,
    pub in_range_coll: Oid,
    pub in_range_asc: bool,
    pub in_range_nulls_first: bool,
    pub winref: Index,
    pub copied_order: bool,
}

/// The root aggregate for one query level.
///
/// `rtable` order is the canonical 1-based index space that `varno`,
/// `rtindex` and friends refer into; it must be preserved end to end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub query_id: u64,
    pub can_set_tag: bool,
    pub has_aggs: bool,
    pub has_window_funcs: bool,
    pub has_target_srfs: bool,
    pub has_sublinks: bool,
    pub has_distinct_on: bool,
    pub has_for_update: bool,
    pub has_row_security: bool,
    pub rtable: Vec<RangeTblEntry>,
    pub jointree: Option<FromExpr>,
    pub merge_action_list: Vec<Node>,
    pub target_list: Vec<Node>,
    pub returning_list: Vec<Node>,
    pub group_clause: Vec<Node>,
    pub group_distinct: bool,
    pub grouping_sets: Vec<Node>,
    pub having_qual: Option<Box<Node>>,
    pub window_clause: Vec<Node>,
    pub distinct_clause: Vec<Node>,
    pub sort_clause: Vec<Node>,
    pub limit_offset: Option<Box<Node>>,
    pub limit_count: Option<Box<Node>>,
    pub row_marks: Vec<Node>,
    pub set_operations: Option<Box<Node>>,
}
