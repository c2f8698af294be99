pub mod home_routes;
pub mod vehicle_routes;
