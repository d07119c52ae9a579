pub mod storages;
