//! The counselor's commentary.
//!
//! After every turn the counselor looks at the new stats and the cards
//! just played and picks one remark from a table of rule-based templates.
//!
//! ## Key Components
//!
//! - [`Condition`]: when a template applies
//! - [`CommentaryTemplate`]: condition + priority + stacking + lines
//! - [`CommentaryEngine`]: ordered scan and random pick
//! - [`reference_tags`]: cosmetic "further reading" links

pub mod condition;
pub mod engine;
pub mod lines;
pub mod references;
pub mod template;

pub use condition::{CommentaryContext, Condition, ConditionFn};
pub use engine::{Commentary, CommentaryEngine};
pub use references::{reference_tags, ReferenceTag, MAX_REFERENCES};
pub use template::{names, standard_templates, CommentaryTemplate, Stacking};
