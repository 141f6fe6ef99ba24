//! MongoDB implementation of InquiryRepository

use async_trait::async_trait;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;
use uuid::Uuid;

use crate::error::InquiryResult;
use crate::models::{Inquiry, InquiryDocument, NewInquiry};
use crate::repository::InquiryRepository;

pub const COLLECTION: &str = "inquiries";

/// MongoDB implementation of the InquiryRepository
pub struct MongoInquiryRepository {
    collection: Collection<InquiryDocument>,
}

impl MongoInquiryRepository {
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<InquiryDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl InquiryRepository for MongoInquiryRepository {
    #[instrument(skip(self, input), fields(inquiry_name = %input.name))]
    async fn create(&self, input: NewInquiry) -> InquiryResult<Inquiry> {
        let inquiry = Inquiry::new(input)?;

        self.collection
            .insert_one(InquiryDocument::from(&inquiry))
            .await?;

        tracing::info!(inquiry_id = %inquiry.id, "Pesan dari {} tersimpan di Database", inquiry.name);
        Ok(inquiry)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> InquiryResult<Option<Inquiry>> {
        self.collection
            .find_one(doc! { "_id": id.to_string() })
            .await?
            .map(Inquiry::try_from)
            .transpose()
    }
}
