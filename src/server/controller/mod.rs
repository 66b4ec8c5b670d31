pub mod auth;
pub mod car;
pub mod document;
pub mod service_record;
pub mod system;
pub mod user;
pub mod view;

#[cfg(test)]
mod test;
