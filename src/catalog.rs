//! Service catalog
//!
//! The catalog is a fixed, ordered list compiled into the binary. Nothing
//! writes to it, so it is exposed as a plain `static` slice.

use serde::Serialize;
use utoipa::ToSchema;

/// A bookable offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Service {
    /// Stable service ID
    #[schema(example = 1)]
    pub id: u32,
    #[schema(value_type = String, example = "DJ Hizmeti (2 Saat)")]
    pub name: &'static str,
    #[schema(value_type = String, example = "Müzik & Sanatçı")]
    pub category: &'static str,
    /// Price in TRY, always positive
    #[schema(example = 5000)]
    pub price: u32,
}

pub static SERVICES: [Service; 5] = [
    Service {
        id: 1,
        name: "DJ Hizmeti (2 Saat)",
        category: "Müzik & Sanatçı",
        price: 5000,
    },
    Service {
        id: 2,
        name: "Masa Süsleme (Romantik)",
        category: "Dekorasyon & Süsleme",
        price: 1500,
    },
    Service {
        id: 3,
        name: "Catering (Kişi Başı)",
        category: "Yemek & İkram",
        price: 800,
    },
    Service {
        id: 4,
        name: "Fotoğraf Çekimi (Tüm Gün)",
        category: "Fotoğraf & Video",
        price: 3500,
    },
    Service {
        id: 5,
        name: "Düğün Pastası (3 Katlı)",
        category: "Yemek & İkram",
        price: 2000,
    },
];

/// All services in catalog order
pub fn list_services() -> &'static [Service] {
    &SERVICES
}
