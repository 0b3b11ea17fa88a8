//! Block generators: each turns authored assets plus a few options into
//! a fully-stated block registered in the package.

pub mod connected;
pub mod pipe;

pub use connected::{generate_connected_block, ConnectedOptions};
pub use pipe::{generate_pipe_block, PipeOptions};
