use std::fmt;

/// The services that share this binary crate. Each runs as its own process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Inventory,
    Orders,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Inventory, Service::Orders];

    pub fn name(self) -> &'static str {
        match self {
            Service::Inventory => "inventory-service",
            Service::Orders => "orders-service",
        }
    }

    /// Body returned by `GET /api/health`.
    pub fn health_status(self) -> &'static str {
        match self {
            Service::Inventory => "ok:inventory-service",
            Service::Orders => "ok:orders-service",
        }
    }

    /// Port used when `PORT` is unset. Distinct per service so both fit on one host.
    pub fn default_port(self) -> u16 {
        match self {
            Service::Inventory => 8081,
            Service::Orders => 8082,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
