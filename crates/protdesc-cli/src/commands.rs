pub mod compute;
pub mod subseq;
pub mod tables;
