use utoipa::OpenApi;

use service::db::{
    check_in_service, check_out_service, dashboard_service, guest_service, housekeeping_service, maintenance_service,
    menu_item_service, reservation_service, room_service, room_service_order_service, service_request_service, staff_service,
};
use service::views;

use crate::response::{ErrorBody, PageMeta, StatusInput};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel operations API", version = "1.0.0"),
    paths(
        routes::health,
        routes::guests::list,
        routes::guests::create,
        routes::guests::get_one,
        routes::guests::update,
        routes::guests::delete,
        routes::guests::history,
        routes::guests::preferences,
        routes::guests::ai_insights,
        routes::reservations::list,
        routes::reservations::create,
        routes::reservations::get_one,
        routes::reservations::update,
        routes::reservations::delete,
        routes::reservations::by_guest,
        routes::reservations::by_room,
        routes::rooms::list,
        routes::rooms::available,
        routes::rooms::create,
        routes::rooms::get_one,
        routes::rooms::update,
        routes::rooms::set_status,
        routes::rooms::delete,
        routes::service_requests::list,
        routes::service_requests::create,
        routes::service_requests::get_one,
        routes::service_requests::update,
        routes::service_requests::delete,
        routes::service_requests::by_reservation,
        routes::service_requests::by_guest,
        routes::service_requests::by_status,
        routes::room_service_orders::list,
        routes::room_service_orders::create,
        routes::room_service_orders::get_one,
        routes::room_service_orders::update,
        routes::room_service_orders::set_status,
        routes::room_service_orders::delete,
        routes::room_service_orders::by_reservation,
        routes::housekeeping::list,
        routes::housekeeping::create,
        routes::housekeeping::get_one,
        routes::housekeeping::update,
        routes::housekeeping::delete,
        routes::housekeeping::by_reservation,
        routes::housekeeping::by_status,
        routes::maintenance::list,
        routes::maintenance::create,
        routes::maintenance::get_one,
        routes::maintenance::update,
        routes::maintenance::delete,
        routes::maintenance::by_reservation,
        routes::maintenance::by_status,
        routes::menu_items::list,
        routes::menu_items::create,
        routes::menu_items::get_one,
        routes::menu_items::update,
        routes::menu_items::delete,
        routes::menu_items::by_category,
        routes::check_ins::list,
        routes::check_ins::create,
        routes::check_ins::get_one,
        routes::check_ins::update,
        routes::check_ins::by_reservation,
        routes::check_outs::list,
        routes::check_outs::create,
        routes::check_outs::get_one,
        routes::check_outs::update,
        routes::check_outs::by_reservation,
        routes::dashboard::stats,
        routes::dashboard::room_status,
        routes::dashboard::service_requests_summary,
        routes::dashboard::revenue,
        routes::tablet::reservation,
        routes::tablet::menu,
        routes::tablet::room_service_order,
        routes::tablet::housekeeping_request,
        routes::tablet::maintenance_issue,
        routes::staff::list,
        routes::staff::create,
        routes::staff::get_one,
        routes::staff::update,
        routes::staff::delete,
        routes::staff::by_role,
    ),
    components(schemas(
        ErrorBody,
        PageMeta,
        StatusInput,
        guest_service::CreateGuest,
        guest_service::UpdateGuest,
        room_service::CreateRoom,
        room_service::UpdateRoom,
        reservation_service::CreateReservation,
        reservation_service::UpdateReservation,
        service_request_service::CreateServiceRequest,
        service_request_service::UpdateServiceRequest,
        room_service_order_service::OrderItemInput,
        room_service_order_service::CreateRoomServiceOrder,
        room_service_order_service::UpdateRoomServiceOrder,
        housekeeping_service::CreateHousekeepingRequest,
        housekeeping_service::UpdateHousekeepingRequest,
        maintenance_service::CreateMaintenanceIssue,
        maintenance_service::UpdateMaintenanceIssue,
        menu_item_service::CreateMenuItem,
        menu_item_service::UpdateMenuItem,
        staff_service::CreateStaff,
        staff_service::UpdateStaff,
        check_in_service::CreateCheckIn,
        check_in_service::UpdateCheckIn,
        check_out_service::CreateCheckOut,
        check_out_service::UpdateCheckOut,
        dashboard_service::DashboardStatsResponse,
        dashboard_service::RoomStatusSummaryResponse,
        dashboard_service::ServiceRequestSummaryResponse,
        dashboard_service::RevenueResponse,
        views::GuestResponse,
        views::RoomResponse,
        views::ReservationResponse,
        views::ServiceRequestResponse,
        views::RoomServiceOrderItemResponse,
        views::RoomServiceOrderResponse,
        views::HousekeepingRequestResponse,
        views::MaintenanceIssueResponse,
        views::MenuItemResponse,
        views::StaffResponse,
        views::CheckInResponse,
        views::CheckOutResponse,
        views::GuestPreferencesResponse,
        views::GuestAiInsightsResponse,
        views::GuestStatisticsResponse,
        views::ServiceUsageResponse,
        views::GuestDetailResponse,
        views::StayResponse,
        views::GuestHistoryResponse,
        views::ReservationDetailResponse,
        views::ServiceRequestDetailResponse,
        views::InRoomTabletReservationResponse,
        views::InRoomTabletMenuResponse,
    )),
    tags(
        (name = "health"),
        (name = "guests"),
        (name = "reservations"),
        (name = "rooms"),
        (name = "service-requests"),
        (name = "room-service-orders"),
        (name = "housekeeping-requests"),
        (name = "maintenance-issues"),
        (name = "menu-items"),
        (name = "check-ins"),
        (name = "check-outs"),
        (name = "dashboard"),
        (name = "in-room-tablet"),
        (name = "staff")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_group() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/v1/guests/{id}/ai-insights"));
        assert!(paths.contains_key("/api/v1/in-room-tablet/room-service-order"));
        assert!(paths.contains_key("/api/v1/dashboard/revenue"));
        assert!(paths.contains_key("/api/v1/staff/role/{role}"));
    }
}
