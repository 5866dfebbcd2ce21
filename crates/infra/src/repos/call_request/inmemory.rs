use super::ICallRequestRepo;
use crate::repos::shared::inmemory_repo::*;
use tiffin_domain::{CallRequest, NewCallRequest, ID};

pub struct InMemoryCallRequestRepo {
    call_requests: std::sync::Mutex<Vec<CallRequest>>,
    sequence: Sequence,
}

impl InMemoryCallRequestRepo {
    pub fn new() -> Self {
        Self {
            call_requests: std::sync::Mutex::new(Vec::new()),
            sequence: Sequence::new(),
        }
    }
}

#[async_trait::async_trait]
impl ICallRequestRepo for InMemoryCallRequestRepo {
    async fn insert(&self, call_request: &NewCallRequest) -> anyhow::Result<CallRequest> {
        let call_request = call_request
            .clone()
            .into_call_request(self.sequence.next());
        insert(&call_request, &self.call_requests);
        Ok(call_request)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<CallRequest>> {
        let mut call_requests = find_by(&self.call_requests, |_| true);
        call_requests.sort_by(|c1, c2| c2.created.cmp(&c1.created).then(c2.id.cmp(&c1.id)));
        Ok(call_requests)
    }

    async fn delete(&self, call_request_id: &ID) -> Option<CallRequest> {
        delete(call_request_id, &self.call_requests)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(count_by(&self.call_requests, |_| true))
    }

    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64> {
        Ok(count_by(&self.call_requests, |c| c.created >= since))
    }
}
