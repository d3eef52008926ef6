use crate::domain::value_objects::ids::{CarId, ClientId, OrderId};
use crate::domain::value_objects::timestamps::Timestamp;

/// A sale of a car to a client.
///
/// Not persisted yet: there is no `pedido` table or route, so ids stay `None`
/// until a caller links them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Option<OrderId>,
    pub car_id: Option<CarId>,
    pub client_id: Option<ClientId>,
    pub ordered_at: Timestamp,
    /// Amount in minor currency units (centavos).
    pub amount_cents: i64,
}

impl Order {
    pub fn new(ordered_at: Timestamp, amount_cents: i64) -> Self {
        Self {
            id: None,
            car_id: None,
            client_id: None,
            ordered_at,
            amount_cents,
        }
    }

    pub fn for_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn for_car(mut self, car_id: CarId) -> Self {
        self.car_id = Some(car_id);
        self
    }
}
