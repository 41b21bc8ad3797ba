//! Places text-search response decoding
//!
//! Field mask: `places.displayName,places.nationalPhoneNumber,
//! places.googleMapsUri,places.addressComponents,places.formattedAddress`.

use serde::Deserialize;

use spiderweb_domain::{Lead, LeadId, LeadSource, LeadStatus, Timestamp};

/// Potential assigned to places that list a phone number
pub const POTENTIAL_WITH_PHONE: u32 = 80;
pub const POTENTIAL_WITHOUT_PHONE: u32 = 40;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesResponse {
    #[serde(default)]
    pub places: Option<Vec<Place>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub display_name: Option<LocalizedText>,
    pub national_phone_number: Option<String>,
    pub google_maps_uri: Option<String>,
    pub formatted_address: Option<String>,
    pub address_components: Option<Vec<AddressComponent>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressComponent {
    pub short_text: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Place {
    fn name(&self) -> Option<&str> {
        non_empty(self.display_name.as_ref().and_then(|d| d.text.as_deref()))
    }

    fn address(&self) -> Option<String> {
        if let Some(formatted) = non_empty(self.formatted_address.as_deref()) {
            return Some(formatted.to_string());
        }
        let joined = self
            .address_components
            .as_ref()?
            .iter()
            .map(|c| c.short_text.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Some(joined).filter(|j| !j.is_empty())
    }

    /// Convert to a lead found at `now`, the `index`-th result of a search
    pub fn to_lead(&self, index: usize, searched_location: &str, now: Timestamp) -> Lead {
        let id = LeadId::new(format!("place_{}_{}", now.as_millis(), index));
        let phone = non_empty(self.national_phone_number.as_deref());
        let maps = non_empty(self.google_maps_uri.as_deref()).unwrap_or("N/A");

        let lead = Lead::new(id, self.name().unwrap_or("Unknown Business"))
            .with_company(self.name().unwrap_or("Unknown Company"))
            .with_location(
                self.address()
                    .unwrap_or_else(|| searched_location.to_string()),
            )
            .with_source(LeadSource::GooglePlaces)
            .with_status(LeadStatus::New)
            .with_notes(format!("Google Maps: {}", maps))
            .created_at(now);

        match phone {
            Some(phone) => lead.with_phone(phone).with_potential(POTENTIAL_WITH_PHONE),
            None => lead.with_potential(POTENTIAL_WITHOUT_PHONE),
        }
    }
}

impl PlacesResponse {
    pub fn into_leads(self, searched_location: &str, now: Timestamp) -> Vec<Lead> {
        self.places
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, place)| place.to_lead(index, searched_location, now))
            .collect()
    }
}

/// Decode a response body into leads
pub fn decode_places(
    body: &str,
    searched_location: &str,
    now: Timestamp,
) -> serde_json::Result<Vec<Lead>> {
    let response: PlacesResponse = serde_json::from_str(body)?;
    Ok(response.into_leads(searched_location, now))
}
