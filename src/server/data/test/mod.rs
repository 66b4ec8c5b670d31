mod car;
mod car_document;
mod service_record;
mod user;
