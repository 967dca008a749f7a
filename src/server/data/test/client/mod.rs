use crate::server::{
    data::client::ClientRepository,
    model::client::{CreateClientParam, UpdateClientParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod exists;
mod get_all;
mod update;

fn acme_param() -> CreateClientParam {
    CreateClientParam {
        client_id: "C-100".to_string(),
        name: "Acme".to_string(),
        matricule_fiscal: "123".to_string(),
        address: "X".to_string(),
        phone: "000".to_string(),
        email: None,
        created_by: None,
    }
}
