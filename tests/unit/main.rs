mod model;
mod test_error;
mod transport;
