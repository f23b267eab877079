pub mod impl_console;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
pub mod setup;
