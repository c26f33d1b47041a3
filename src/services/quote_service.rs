use crate::db::{Quote, QuoteDraft, QuoteStore};
use crate::http::{ApiError, QuoteInput};
use crate::pricing::calculate;
use std::sync::Arc;

/// Prices quotes and owns their create/read/update/delete lifecycle.
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: QuoteInput) -> Result<Quote, ApiError> {
        let draft = price(input)?;
        let quote = self.store.create(&draft).await?;

        tracing::info!(
            "✅ Quote {} created: {} km, {}, '{}' -> {:.4}",
            quote.id,
            quote.annual_kilometers,
            quote.vehicle_type,
            quote.registration_office,
            quote.calculated_premium
        );
        Ok(quote)
    }

    pub async fn list(&self) -> Result<Vec<Quote>, ApiError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Quote, ApiError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::quote_not_found(id))
    }

    /// Replaces all fields and recomputes the premium from the new inputs.
    pub async fn update(&self, id: i64, input: QuoteInput) -> Result<Quote, ApiError> {
        let draft = price(input)?;
        let quote = self
            .store
            .update(id, &draft)
            .await?
            .ok_or_else(|| ApiError::quote_not_found(id))?;

        tracing::info!("✅ Quote {} updated -> {:.4}", quote.id, quote.calculated_premium);
        Ok(quote)
    }

    /// Returns `false` when there was nothing to delete.
    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let removed = self.store.delete(id).await?;
        if removed {
            tracing::info!("🗑️ Quote {} deleted", id);
        } else {
            tracing::debug!("Quote {} not present, nothing deleted", id);
        }
        Ok(removed)
    }
}

fn price(input: QuoteInput) -> Result<QuoteDraft, ApiError> {
    let annual_kilometers = u32::try_from(input.annual_kilometers).map_err(|_| {
        ApiError::Validation(format!(
            "annualKilometers must be between 0 and {}, got {}",
            u32::MAX,
            input.annual_kilometers
        ))
    })?;
    let registration_office = input.registration_office.unwrap_or_default();

    let breakdown = calculate(annual_kilometers, input.vehicle_type, &registration_office);
    tracing::debug!(
        mileage = breakdown.mileage_factor,
        vehicle = breakdown.vehicle_factor,
        region = breakdown.region_factor,
        premium = breakdown.premium,
        "premium calculated"
    );

    Ok(QuoteDraft {
        annual_kilometers,
        postcode: input.postcode.unwrap_or_default(),
        registration_office,
        vehicle_type: input.vehicle_type,
        calculated_premium: breakdown.premium,
    })
}
