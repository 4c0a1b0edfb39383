mod drone_test;
mod middleware_test;
mod user_test;
