use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{ApiClient, ClientError, ErrorBody, ListQuery};

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
        )]
        pub struct $name(pub Uuid);
    };
}

id_type!(ShoeId);
id_type!(SaleId);
id_type!(UserId);
