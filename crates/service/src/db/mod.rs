pub mod guest_service;
pub mod room_service;
pub mod reservation_service;
pub mod service_request_service;
pub mod room_service_order_service;
pub mod housekeeping_service;
pub mod maintenance_service;
pub mod menu_item_service;
pub mod staff_service;
pub mod check_in_service;
pub mod check_out_service;
pub mod dashboard_service;
pub mod tablet_service;
