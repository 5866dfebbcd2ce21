use crate::shared::entity::{Entity, ID};

/// A visitor asking to be called back
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub created: i64,
}

impl Entity for CallRequest {
    fn id(&self) -> ID {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCallRequest {
    pub name: String,
    pub phone: String,
    pub created: i64,
}

impl NewCallRequest {
    pub fn into_call_request(self, id: ID) -> CallRequest {
        CallRequest {
            id,
            name: self.name,
            phone: self.phone,
            created: self.created,
        }
    }
}
