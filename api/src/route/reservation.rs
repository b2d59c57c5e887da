use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    delete_reservation, register_reservation, show_reservation, show_reservation_list,
    show_reservations_in_period,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    // "/intervalo" is registered before "/:reservation_id"; axum matches
    // the literal segment first either way.
    let reservations_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/intervalo", get(show_reservations_in_period))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", delete(delete_reservation));

    Router::new().nest("/reservas", reservations_routers)
}
