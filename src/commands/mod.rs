pub mod compute;
pub mod explain;
pub mod init;
