//! Intent dispatch
//!
//! Maps a recognized intent to its query flow and turns the outcome into a
//! spoken response. Every failure below this point ends up as a short apology
//! naming the venue; the cause is only logged.

use tracing::{Span, field, info, instrument, warn};

use crate::Result;
use crate::alexa::{HELP_INTENT, IntentRequest, SpokenResponse, SsmlBuilder};
use crate::besttime::ForecastProvider;
use crate::clock::Clock;
use crate::density::current_density;
use crate::models::{ForecastSlot, VenueQuery};
use crate::quiet_hours::quiet_hours_sentence;
use crate::venue_resolver::VenueResolver;

pub const VENUE_NAME_SLOT: &str = "VenueName";
pub const VENUE_ADDRESS_SLOT: &str = "VenueAddress";

const HELP_PAUSE_MS: u32 = 1000;
const ABOUT_TEXT: &str = "CanWeGoYet is an Alexa Skill that can give an estimate of the current population density and the quiet hours of a place.";

/// Intents the skill understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    CurrentTime,
    QuietHours,
    Help,
    About,
}

impl Intent {
    /// Unknown names fall back to `About`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "CurrentTimeIntent" => Intent::CurrentTime,
            "QuietHoursIntent" => Intent::QuietHours,
            HELP_INTENT => Intent::Help,
            _ => Intent::About,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Intent::CurrentTime => "current_time",
            Intent::QuietHours => "quiet_hours",
            Intent::Help => "help",
            Intent::About => "about",
        }
    }
}

/// Routes intent requests to the venue queries
pub struct IntentDispatcher<P, C> {
    provider: P,
    clock: C,
}

impl<P: ForecastProvider, C: Clock> IntentDispatcher<P, C> {
    pub fn new(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    /// Produce the spoken response for one request. Never fails.
    #[instrument(
        skip_all,
        fields(intent = %request.intent_name, handler = field::Empty, outcome = field::Empty)
    )]
    pub async fn dispatch(&self, request: &IntentRequest) -> SpokenResponse {
        let intent = Intent::from_name(&request.intent_name);
        Span::current().record("handler", intent.as_str());

        match intent {
            Intent::CurrentTime => self.handle_current_time(request).await,
            Intent::QuietHours => self.handle_quiet_hours(request).await,
            Intent::Help => {
                record_outcome("success");
                help_response()
            }
            Intent::About => {
                record_outcome("success");
                about_response()
            }
        }
    }

    async fn handle_current_time(&self, request: &IntentRequest) -> SpokenResponse {
        let venue_name = request.slot(VENUE_NAME_SLOT);
        let slot = ForecastSlot::at(self.clock.now());

        let text = self.current_time_flow(request, slot).await.unwrap_or_else(|e| {
            warn!(
                error.kind = e.kind(),
                "Error retrieving population density for '{}': {}", venue_name, e
            );
            record_outcome("fallback");
            format!("Error retrieving the current population density at {venue_name}")
        });

        let mut builder = SsmlBuilder::new();
        builder.say(text);
        SpokenResponse::ssml("Current population density at a venue", builder.build())
    }

    async fn current_time_flow(
        &self,
        request: &IntentRequest,
        slot: ForecastSlot,
    ) -> Result<String> {
        let query = venue_query(request)?;
        let sentence = current_density(&self.provider, &query, slot).await?;
        record_outcome("success");
        Ok(sentence)
    }

    async fn handle_quiet_hours(&self, request: &IntentRequest) -> SpokenResponse {
        let venue_name = request.slot(VENUE_NAME_SLOT);

        let text = self.quiet_hours_flow(request).await.unwrap_or_else(|e| {
            warn!(
                error.kind = e.kind(),
                "Error retrieving quiet hours for '{}': {}", venue_name, e
            );
            record_outcome("fallback");
            format!("Error retrieving the quiet hours at {venue_name}")
        });

        let mut builder = SsmlBuilder::new();
        builder.say(text);
        SpokenResponse::ssml("Quiet hours at a venue", builder.build())
    }

    async fn quiet_hours_flow(&self, request: &IntentRequest) -> Result<String> {
        let query = venue_query(request)?;
        let venue_id = VenueResolver::resolve_venue_id(&self.provider, &query).await?;
        info!("Resolved '{}' to venue id {}", query.name, venue_id);
        let sentence = quiet_hours_sentence(&self.provider, &venue_id).await?;
        record_outcome("success");
        Ok(sentence)
    }
}

fn venue_query(request: &IntentRequest) -> Result<VenueQuery> {
    VenueQuery::parse(
        request.slot(VENUE_NAME_SLOT),
        request.slot(VENUE_ADDRESS_SLOT),
    )
}

fn record_outcome(outcome: &'static str) {
    Span::current().record("outcome", field::display(outcome));
}

fn help_response() -> SpokenResponse {
    let mut builder = SsmlBuilder::new();
    builder
        .say("Here are some of the things you can ask:")
        .pause(HELP_PAUSE_MS)
        .say("How is it like at a place at this address?")
        .pause(HELP_PAUSE_MS)
        .say("What are the quiet hours at a place at this address");
    SpokenResponse::ssml("CanWeGoYet Help", builder.build())
}

fn about_response() -> SpokenResponse {
    SpokenResponse::plain("About", ABOUT_TEXT)
}
