pub mod city_controller;
pub mod game_controller;
pub mod vehicle_controller;
