pub mod travel_repository;
