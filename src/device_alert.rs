pub mod impl_dialog;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
