pub mod apply;
pub mod check;
pub mod completions;
pub mod detect;
pub mod directive;
pub mod install;
pub mod maintenance;
pub mod runtime;
