pub mod algod_provider;
