pub use super::driver::Entity as Driver;
