pub mod travel_dto;
