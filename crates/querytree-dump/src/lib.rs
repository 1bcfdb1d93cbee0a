//! Serializes planner query trees into ordered diagnostic documents.
//!
//! Given a [`querytree_model::Query`] (or any single node), [`Dumper`]
//! produces an independent, insertion-ordered [`Value`] that can be encoded
//! pretty-printed or compact and written to any byte sink.
//!
//! # Example
//!
//! ```
//! use querytree_dump::Dumper;
//! use querytree_model::{Node, RangeTblRef};
//!
//! let node = Node::RangeTblRef(RangeTblRef { rtindex: 1 });
//! let doc = Dumper::new().node(Some(&node)).unwrap();
//! assert_eq!(doc.format(false), r#"{"node":"RangeTblRef","rtindex":1}"#);
//! ```

pub mod dump;
pub mod error;
pub mod namelist;
pub mod sink;
pub mod trace;
pub mod value;

pub use dump::{DumpLimits, Dumper};
pub use error::DumpError;
pub use namelist::{NameList, join_names};
pub use sink::{Format, write_document, write_document_to_path};
pub use trace::log_range_table;
pub use value::{ObjectBuilder, Value};

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod namelist_tests;
