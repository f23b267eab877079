pub mod impl_demo;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_http;
pub mod interface;
#[cfg(test)]
pub mod test_server;
