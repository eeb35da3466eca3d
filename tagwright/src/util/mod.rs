pub mod io;
pub(crate) mod text;
