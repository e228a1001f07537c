pub mod tinyman_provider;
