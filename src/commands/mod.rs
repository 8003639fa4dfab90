pub mod list;
pub mod partition;
pub mod run;
pub mod split;
