//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::warn;
use uuid::Uuid;

use crate::common::{
    BookingRequestId, CityId, ConversationId, MediaId, NotificationId, TagId, VendorId,
};

use crate::domains::bookings::{BookingRequest, BookingRequestData, BookingStatus, SubmitBookingRequestInput};
use crate::domains::discovery::{self, DiscoverFilters, VendorKind};
use crate::domains::discovery::data::{DiscoverConnection, DiscoverFilterInput};
use crate::domains::favorites::Favorite;
use crate::domains::locations::{City, CityData};
use crate::domains::messaging::{Conversation, ConversationData, Message, MessageData};
use crate::domains::notifications::{Notification, NotificationData, NotificationKind};
use crate::domains::profiles::{Profile, ProfileData, ProfileRole, UpdateProfileInput};
use crate::domains::tag::{Tag, TagData, TagKindData};
use crate::domains::vendors::{
    CreateVendorInput, UpdateVendorInput, Vendor, VendorData, VendorMedia, VendorMediaData,
    VendorStatus,
};

/// Token and profile returned by sign-in
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct AuthPayload {
    pub token: String,
    pub profile: ProfileData,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Convert anyhow::Error to juniper FieldError for thin resolvers
fn to_field_error(e: anyhow::Error) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

fn field_error(message: impl Into<String>) -> FieldError {
    FieldError::new(message.into(), juniper::Value::null())
}

/// Record a notification without letting a failure surface to the caller.
/// Notification writes ride alongside the triggering mutation; losing one
/// must not fail the mutation itself.
async fn notify(
    ctx: &GraphQLContext,
    recipient_id: crate::common::ProfileId,
    kind: NotificationKind,
    body: String,
    booking_request_id: Option<BookingRequestId>,
    conversation_id: Option<ConversationId>,
) {
    if let Err(e) = Notification::record(
        recipient_id,
        kind,
        body,
        booking_request_id,
        conversation_id,
        &ctx.pool,
    )
    .await
    {
        warn!(error = %e, "Failed to record notification");
    }
}

/// Load a conversation and check the caller participates in it
async fn load_conversation_for(
    ctx: &GraphQLContext,
    conversation_id: ConversationId,
    profile_id: crate::common::ProfileId,
) -> FieldResult<Conversation> {
    let conversation = Conversation::find_by_id(conversation_id, &ctx.pool)
        .await
        .map_err(to_field_error)?
        .ok_or_else(|| field_error("Conversation not found"))?;

    if !conversation.has_participant(profile_id) {
        return Err(field_error("Not a participant in this conversation"));
    }

    Ok(conversation)
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Discovery
    // =========================================================================

    /// Search and browse artist listings
    async fn discover_artists(
        ctx: &GraphQLContext,
        filters: Option<DiscoverFilterInput>,
    ) -> FieldResult<DiscoverConnection> {
        let filters: DiscoverFilters = filters.unwrap_or_default().into();
        let page = discovery::discover(VendorKind::Artist, filters, &ctx.pool)
            .await
            .map_err(|e| field_error(e.to_string()))?;
        Ok(page.into())
    }

    /// Search and browse venue listings
    async fn discover_venues(
        ctx: &GraphQLContext,
        filters: Option<DiscoverFilterInput>,
    ) -> FieldResult<DiscoverConnection> {
        let filters: DiscoverFilters = filters.unwrap_or_default().into();
        let page = discovery::discover(VendorKind::Venue, filters, &ctx.pool)
            .await
            .map_err(|e| field_error(e.to_string()))?;
        Ok(page.into())
    }

    // =========================================================================
    // Vendors
    // =========================================================================

    /// Get a single vendor listing by ID
    async fn vendor(ctx: &GraphQLContext, id: Uuid) -> FieldResult<Option<VendorData>> {
        let vendor = Vendor::find_by_id(VendorId::from_uuid(id), &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(vendor.map(VendorData::from))
    }

    /// Listings owned by the signed-in profile
    async fn my_vendors(ctx: &GraphQLContext) -> FieldResult<Vec<VendorData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendors = Vendor::find_by_owner(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(vendors.into_iter().map(VendorData::from).collect())
    }

    /// Media attached to a vendor listing, primary first
    async fn vendor_media(ctx: &GraphQLContext, vendor_id: Uuid) -> FieldResult<Vec<VendorMediaData>> {
        let media = VendorMedia::find_by_vendor(VendorId::from_uuid(vendor_id), &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(media.into_iter().map(VendorMediaData::from).collect())
    }

    /// Tags assigned to a vendor listing
    async fn vendor_tags(ctx: &GraphQLContext, vendor_id: Uuid) -> FieldResult<Vec<TagData>> {
        let tags = Tag::find_for_vendor(VendorId::from_uuid(vendor_id), &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(tags.into_iter().map(TagData::from).collect())
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// All tags, optionally restricted to one kind
    async fn tags(ctx: &GraphQLContext, kind: Option<TagKindData>) -> FieldResult<Vec<TagData>> {
        let tags = match kind {
            Some(kind) => Tag::find_by_kind(kind.into(), &ctx.pool).await,
            None => Tag::find_all(&ctx.pool).await,
        }
        .map_err(to_field_error)?;
        Ok(tags.into_iter().map(TagData::from).collect())
    }

    /// All cities vendors can be located in
    async fn cities(ctx: &GraphQLContext) -> FieldResult<Vec<CityData>> {
        let cities = City::find_all(&ctx.pool).await.map_err(to_field_error)?;
        Ok(cities.into_iter().map(CityData::from).collect())
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// The signed-in profile
    async fn me(ctx: &GraphQLContext) -> FieldResult<ProfileData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let profile = Profile::find_by_id(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Profile not found"))?;
        Ok(profile.into())
    }

    /// Vendors the signed-in profile has saved, most recently saved first
    async fn my_favorites(ctx: &GraphQLContext) -> FieldResult<Vec<VendorData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendors = Favorite::find_vendors(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(vendors.into_iter().map(VendorData::from).collect())
    }

    /// Whether the signed-in profile has saved a vendor
    async fn is_favorite(ctx: &GraphQLContext, vendor_id: Uuid) -> FieldResult<bool> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        Favorite::is_favorite(user.profile_id, VendorId::from_uuid(vendor_id), &ctx.pool)
            .await
            .map_err(to_field_error)
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Booking requests the signed-in profile has submitted
    async fn my_booking_requests(ctx: &GraphQLContext) -> FieldResult<Vec<BookingRequestData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let bookings = BookingRequest::find_by_organizer(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(bookings.into_iter().map(BookingRequestData::from).collect())
    }

    /// Booking requests received by the signed-in profile's listings
    async fn incoming_booking_requests(
        ctx: &GraphQLContext,
    ) -> FieldResult<Vec<BookingRequestData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let bookings = BookingRequest::find_for_vendor_owner(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(bookings.into_iter().map(BookingRequestData::from).collect())
    }

    // =========================================================================
    // Messaging
    // =========================================================================

    /// Conversations the signed-in profile participates in, newest first
    async fn my_conversations(ctx: &GraphQLContext) -> FieldResult<Vec<ConversationData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let conversations = Conversation::find_for_profile(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(conversations
            .into_iter()
            .map(ConversationData::from)
            .collect())
    }

    /// Messages in a conversation, chronological. Participants only.
    async fn messages(ctx: &GraphQLContext, conversation_id: Uuid) -> FieldResult<Vec<MessageData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let conversation_id = ConversationId::from_uuid(conversation_id);
        load_conversation_for(ctx, conversation_id, user.profile_id).await?;

        let messages = Message::find_by_conversation(conversation_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(messages.into_iter().map(MessageData::from).collect())
    }

    /// Count of unread messages addressed to the signed-in profile
    async fn unread_message_count(ctx: &GraphQLContext) -> FieldResult<i32> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let count = Message::unread_count(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(count as i32)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Notifications for the signed-in profile, newest first
    async fn my_notifications(
        ctx: &GraphQLContext,
        only_unread: Option<bool>,
    ) -> FieldResult<Vec<NotificationData>> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let notifications =
            Notification::find_by_recipient(user.profile_id, only_unread.unwrap_or(false), &ctx.pool)
                .await
                .map_err(to_field_error)?;
        Ok(notifications
            .into_iter()
            .map(NotificationData::from)
            .collect())
    }

    /// Count of unread notifications for the signed-in profile
    async fn unread_notification_count(ctx: &GraphQLContext) -> FieldResult<i32> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let count = Notification::unread_count(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(count as i32)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Auth
    // =========================================================================

    /// Sign in with an email, creating the profile on first use. Role is
    /// "organizer" or "vendor"; it defaults to organizer and is only applied
    /// at creation.
    async fn sign_in(
        ctx: &GraphQLContext,
        email: String,
        display_name: String,
        role: Option<String>,
    ) -> FieldResult<AuthPayload> {
        let role: ProfileRole = match role {
            Some(role) => role.parse().map_err(to_field_error)?,
            None => ProfileRole::default(),
        };

        let profile = match Profile::find_by_email(&email, &ctx.pool)
            .await
            .map_err(to_field_error)?
        {
            Some(existing) => existing,
            None => Profile::create(display_name, email, role, &ctx.pool)
                .await
                .map_err(to_field_error)?,
        };

        let token = ctx
            .jwt_service
            .create_token(profile.id.into_uuid(), profile.email.clone())
            .map_err(to_field_error)?;

        Ok(AuthPayload {
            token,
            profile: profile.into(),
        })
    }

    // =========================================================================
    // Vendors
    // =========================================================================

    /// Create a vendor listing owned by the signed-in profile
    async fn create_vendor(
        ctx: &GraphQLContext,
        input: CreateVendorInput,
    ) -> FieldResult<VendorData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;

        if !matches!(input.kind.as_str(), "artist" | "venue") {
            return Err(field_error(format!("Invalid vendor kind: {}", input.kind)));
        }

        let vendor = Vendor::create(
            user.profile_id,
            &input.kind,
            input.name,
            input.description,
            input.city_id.map(CityId::from_uuid),
            input.base_price,
            input.capacity,
            &ctx.pool,
        )
        .await
        .map_err(to_field_error)?;

        if let Some(tag_ids) = input.tag_ids {
            let tag_ids: Vec<TagId> = tag_ids.into_iter().map(TagId::from_uuid).collect();
            Vendor::replace_tags(vendor.id, &tag_ids, &ctx.pool)
                .await
                .map_err(to_field_error)?;
        }

        Ok(vendor.into())
    }

    /// Update a vendor listing. Owner only.
    async fn update_vendor(
        ctx: &GraphQLContext,
        id: Uuid,
        input: UpdateVendorInput,
    ) -> FieldResult<VendorData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let id = VendorId::from_uuid(id);

        let vendor = Vendor::find_by_id(id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;
        vendor.ensure_owned_by(user.profile_id).map_err(to_field_error)?;

        let updated = Vendor::update(
            id,
            input.name,
            input.description,
            input.city_id.map(CityId::from_uuid),
            input.base_price,
            input.capacity,
            &ctx.pool,
        )
        .await
        .map_err(to_field_error)?;

        if let Some(tag_ids) = input.tag_ids {
            let tag_ids: Vec<TagId> = tag_ids.into_iter().map(TagId::from_uuid).collect();
            Vendor::replace_tags(id, &tag_ids, &ctx.pool)
                .await
                .map_err(to_field_error)?;
        }

        Ok(updated.into())
    }

    /// Show or hide a vendor listing. Owner only. Hidden listings never
    /// appear in discovery.
    async fn set_vendor_status(
        ctx: &GraphQLContext,
        id: Uuid,
        status: String,
    ) -> FieldResult<VendorData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let id = VendorId::from_uuid(id);

        let status: VendorStatus = status.parse().map_err(to_field_error)?;

        let vendor = Vendor::find_by_id(id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;
        vendor.ensure_owned_by(user.profile_id).map_err(to_field_error)?;

        let updated = Vendor::set_status(id, status, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(updated.into())
    }

    /// Attach a media URL to a vendor listing. Owner only.
    async fn add_vendor_media(
        ctx: &GraphQLContext,
        vendor_id: Uuid,
        url: String,
        is_primary: Option<bool>,
        sort_order: Option<i32>,
    ) -> FieldResult<VendorMediaData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendor_id = VendorId::from_uuid(vendor_id);

        let vendor = Vendor::find_by_id(vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;
        vendor.ensure_owned_by(user.profile_id).map_err(to_field_error)?;

        let media = VendorMedia::add(
            vendor_id,
            url,
            is_primary.unwrap_or(false),
            sort_order.unwrap_or(0),
            &ctx.pool,
        )
        .await
        .map_err(to_field_error)?;
        Ok(media.into())
    }

    /// Flag one media row as the vendor's primary image. Owner only.
    async fn set_primary_media(
        ctx: &GraphQLContext,
        vendor_id: Uuid,
        media_id: Uuid,
    ) -> FieldResult<bool> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendor_id = VendorId::from_uuid(vendor_id);

        let vendor = Vendor::find_by_id(vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;
        vendor.ensure_owned_by(user.profile_id).map_err(to_field_error)?;

        VendorMedia::set_primary(MediaId::from_uuid(media_id), vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(true)
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Submit a booking request to a vendor. Notifies the vendor owner.
    async fn submit_booking_request(
        ctx: &GraphQLContext,
        input: SubmitBookingRequestInput,
    ) -> FieldResult<BookingRequestData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendor_id = VendorId::from_uuid(input.vendor_id);

        let vendor = Vendor::find_by_id(vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;

        if vendor.owner_profile_id == user.profile_id {
            return Err(field_error("Cannot book your own listing"));
        }

        let event_date = input
            .event_date
            .parse::<chrono::NaiveDate>()
            .map_err(|e| field_error(format!("Invalid event date: {}", e)))?;

        let booking = BookingRequest::create(
            user.profile_id,
            vendor_id,
            event_date,
            input.message,
            input.offered_price,
            &ctx.pool,
        )
        .await
        .map_err(to_field_error)?;

        notify(
            ctx,
            vendor.owner_profile_id,
            NotificationKind::BookingRequest,
            format!("New booking request for {}", vendor.name),
            Some(booking.id),
            None,
        )
        .await;

        Ok(booking.into())
    }

    /// Accept or decline a pending booking request. Vendor owner only.
    /// Notifies the organizer.
    async fn respond_to_booking_request(
        ctx: &GraphQLContext,
        id: Uuid,
        accept: bool,
    ) -> FieldResult<BookingRequestData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let id = BookingRequestId::from_uuid(id);

        let booking = BookingRequest::find_by_id(id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Booking request not found"))?;

        let vendor = Vendor::find_by_id(booking.vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;
        vendor.ensure_owned_by(user.profile_id).map_err(to_field_error)?;

        let next = if accept {
            BookingStatus::Accepted
        } else {
            BookingStatus::Declined
        };
        let status = booking.parsed_status().map_err(to_field_error)?;
        if !status.can_transition_to(next) {
            return Err(field_error(format!(
                "Cannot move booking request from {} to {}",
                status, next
            )));
        }

        let updated = BookingRequest::transition(id, next, &ctx.pool)
            .await
            .map_err(to_field_error)?;

        notify(
            ctx,
            updated.organizer_id,
            NotificationKind::BookingResponse,
            format!("Your booking request for {} was {}", vendor.name, next),
            Some(updated.id),
            None,
        )
        .await;

        Ok(updated.into())
    }

    /// Cancel a pending booking request. Submitting organizer only.
    async fn cancel_booking_request(
        ctx: &GraphQLContext,
        id: Uuid,
    ) -> FieldResult<BookingRequestData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let id = BookingRequestId::from_uuid(id);

        let booking = BookingRequest::find_by_id(id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Booking request not found"))?;

        if booking.organizer_id != user.profile_id {
            return Err(field_error("Only the submitting organizer can cancel"));
        }

        let status = booking.parsed_status().map_err(to_field_error)?;
        if !status.can_transition_to(BookingStatus::Cancelled) {
            return Err(field_error(format!(
                "Cannot cancel a booking request in status {}",
                status
            )));
        }

        let updated = BookingRequest::transition(id, BookingStatus::Cancelled, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(updated.into())
    }

    // =========================================================================
    // Messaging
    // =========================================================================

    /// Start (or reuse) a conversation with a vendor and send the first
    /// message. Notifies the vendor owner.
    async fn start_conversation(
        ctx: &GraphQLContext,
        vendor_id: Uuid,
        body: String,
    ) -> FieldResult<ConversationData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendor_id = VendorId::from_uuid(vendor_id);

        if body.trim().is_empty() {
            return Err(field_error("Message body cannot be empty"));
        }

        let vendor = Vendor::find_by_id(vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;

        if vendor.owner_profile_id == user.profile_id {
            return Err(field_error("Cannot message your own listing"));
        }

        let conversation = Conversation::find_or_create(
            user.profile_id,
            vendor.owner_profile_id,
            vendor_id,
            &ctx.pool,
        )
        .await
        .map_err(to_field_error)?;

        Message::create(conversation.id, user.profile_id, body, &ctx.pool)
            .await
            .map_err(to_field_error)?;

        notify(
            ctx,
            vendor.owner_profile_id,
            NotificationKind::NewMessage,
            format!("New message about {}", vendor.name),
            None,
            Some(conversation.id),
        )
        .await;

        Ok(conversation.into())
    }

    /// Send a message in an existing conversation. Participants only.
    /// Notifies the other participant.
    async fn send_message(
        ctx: &GraphQLContext,
        conversation_id: Uuid,
        body: String,
    ) -> FieldResult<MessageData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let conversation_id = ConversationId::from_uuid(conversation_id);

        if body.trim().is_empty() {
            return Err(field_error("Message body cannot be empty"));
        }

        let conversation = load_conversation_for(ctx, conversation_id, user.profile_id).await?;

        let message = Message::create(conversation_id, user.profile_id, body, &ctx.pool)
            .await
            .map_err(to_field_error)?;

        notify(
            ctx,
            conversation.counterparty(user.profile_id),
            NotificationKind::NewMessage,
            "New message".to_string(),
            None,
            Some(conversation_id),
        )
        .await;

        Ok(message.into())
    }

    /// Mark every message sent to the signed-in profile in a conversation
    /// as read. Returns the number of messages marked.
    async fn mark_conversation_read(
        ctx: &GraphQLContext,
        conversation_id: Uuid,
    ) -> FieldResult<i32> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let conversation_id = ConversationId::from_uuid(conversation_id);
        load_conversation_for(ctx, conversation_id, user.profile_id).await?;

        let marked = Message::mark_read(conversation_id, user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(marked as i32)
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Save a vendor. Saving twice is a no-op.
    async fn add_favorite(ctx: &GraphQLContext, vendor_id: Uuid) -> FieldResult<bool> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let vendor_id = VendorId::from_uuid(vendor_id);

        Vendor::find_by_id(vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?
            .ok_or_else(|| field_error("Vendor not found"))?;

        Favorite::add(user.profile_id, vendor_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(true)
    }

    /// Remove a saved vendor. Returns whether anything was removed.
    async fn remove_favorite(ctx: &GraphQLContext, vendor_id: Uuid) -> FieldResult<bool> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        Favorite::remove(user.profile_id, VendorId::from_uuid(vendor_id), &ctx.pool)
            .await
            .map_err(to_field_error)
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Update the signed-in profile
    async fn update_my_profile(
        ctx: &GraphQLContext,
        input: UpdateProfileInput,
    ) -> FieldResult<ProfileData> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let profile = Profile::update(
            user.profile_id,
            input.display_name,
            input.bio,
            input.avatar_url,
            &ctx.pool,
        )
        .await
        .map_err(to_field_error)?;
        Ok(profile.into())
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Mark one notification as read. Returns whether it was unread.
    async fn mark_notification_read(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        Notification::mark_read(NotificationId::from_uuid(id), user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)
    }

    /// Mark every unread notification as read. Returns the number marked.
    async fn mark_all_notifications_read(ctx: &GraphQLContext) -> FieldResult<i32> {
        let user = ctx.require_auth().map_err(|e| field_error(e.to_string()))?;
        let marked = Notification::mark_all_read(user.profile_id, &ctx.pool)
            .await
            .map_err(to_field_error)?;
        Ok(marked as i32)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
