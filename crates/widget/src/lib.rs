pub mod editor;
pub mod host;
pub mod session;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;
