//! Typed user actions and their dispatch.
//!
//! Every interaction the page supports is one [`Action`] variant. Buttons
//! rendered by the product grid and the wishlist map to actions through
//! [`Action::from_button`]; forms map directly from their raw values.
//! [`dispatch`] runs the action against a [`Shop`] and returns an
//! [`Outcome`] describing what the page should show next.

use demo_shop_core::ProductId;

use crate::error::{Result, ShopError};
use crate::render::{Section, View};
use crate::reports::ReportCounts;
use crate::shop::{Clock, Shop, WishlistAdd};
use crate::store::KeyValueStore;
use crate::validate::{self, FieldErrors, LoginForm, RegisterForm, ReviewForm};

/// Confirmation shown after a purchase.
pub const ORDER_ADDED: &str = "Added to orders.";
/// Confirmation shown after wishlisting a product.
pub const WISHLIST_ADDED: &str = "Added to wishlist.";
/// Notice shown after a valid registration.
pub const REGISTERED: &str = "Registration successful (demo). You can now login.";
/// Notice shown after a valid login.
pub const LOGGED_IN: &str = "Login successful (demo).";

/// A user interaction.
#[derive(Debug, Clone)]
pub enum Action {
    Buy(ProductId),
    AddToWishlist(ProductId),
    RemoveFromWishlist(ProductId),
    SubmitReview(ReviewForm),
    Login(LoginForm),
    Register(RegisterForm),
}

impl Action {
    /// Map a clicked button's data attributes to an action.
    ///
    /// `kind` is the `data-action` value (`buy`, `wish`) or `remove` for a
    /// wishlist row's `data-remove` button; `id` is the attribute's id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::InvalidAction`] for an unknown kind or an id
    /// that is not a number.
    pub fn from_button(kind: &str, id: &str) -> Result<Self> {
        let product_id: ProductId = id
            .parse()
            .map_err(|_| ShopError::InvalidAction(format!("{kind}: bad id {id:?}")))?;

        match kind {
            "buy" => Ok(Self::Buy(product_id)),
            "wish" => Ok(Self::AddToWishlist(product_id)),
            "remove" => Ok(Self::RemoveFromWishlist(product_id)),
            other => Err(ShopError::InvalidAction(other.to_string())),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Buy(_) => "buy",
            Self::AddToWishlist(_) => "wish",
            Self::RemoveFromWishlist(_) => "remove",
            Self::SubmitReview(_) => "review",
            Self::Login(_) => "login",
            Self::Register(_) => "register",
        }
    }
}

/// What the page should do after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Confirmation to show the user.
    pub notice: Option<&'static str>,
    /// Invalid form fields. Non-empty means nothing else happened.
    pub errors: FieldErrors,
    /// Sections whose markup is now stale.
    pub refresh: Vec<Section>,
    /// Page to navigate to.
    pub navigate: Option<View>,
    /// Fresh counts, present whenever the store changed.
    pub reports: Option<ReportCounts>,
}

impl Outcome {
    fn rejected(errors: FieldErrors) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Whether a form submission was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Run `action` against `shop`.
///
/// # Errors
///
/// Returns [`ShopError::UnknownProduct`] when a product action names an id
/// outside the catalog, or a storage error. Invalid forms are not errors;
/// see [`Outcome::errors`].
pub fn dispatch<B: KeyValueStore, C: Clock>(
    shop: &mut Shop<B, C>,
    action: Action,
) -> Result<Outcome> {
    tracing::debug!(action = action.name(), "Dispatching action");

    match action {
        Action::Buy(id) => {
            shop.buy(id)?;
            Ok(Outcome {
                notice: Some(ORDER_ADDED),
                refresh: vec![Section::Orders, Section::Reports],
                reports: Some(shop.reports()?),
                ..Outcome::default()
            })
        }
        Action::AddToWishlist(id) => match shop.add_to_wishlist(id)? {
            WishlistAdd::Added(_) => Ok(Outcome {
                notice: Some(WISHLIST_ADDED),
                refresh: vec![Section::Wishlist, Section::Reports],
                reports: Some(shop.reports()?),
                ..Outcome::default()
            }),
            WishlistAdd::AlreadyPresent => Ok(Outcome::default()),
        },
        Action::RemoveFromWishlist(id) => {
            shop.remove_from_wishlist(id)?;
            Ok(Outcome {
                refresh: vec![Section::Wishlist, Section::Reports],
                reports: Some(shop.reports()?),
                ..Outcome::default()
            })
        }
        Action::SubmitReview(form) => match validate::review(&form) {
            Ok(review) => {
                shop.add_review(review)?;
                Ok(Outcome {
                    refresh: vec![Section::Reviews, Section::Reports],
                    reports: Some(shop.reports()?),
                    ..Outcome::default()
                })
            }
            Err(errors) => Ok(Outcome::rejected(errors)),
        },
        Action::Login(form) => match validate::login(&form) {
            Ok(login) => {
                tracing::info!(email = %login.email, "Demo login accepted");
                Ok(Outcome {
                    notice: Some(LOGGED_IN),
                    navigate: Some(View::Home),
                    ..Outcome::default()
                })
            }
            Err(errors) => Ok(Outcome::rejected(errors)),
        },
        Action::Register(form) => match validate::register(&form) {
            Ok(registration) => {
                tracing::info!(email = %registration.email, "Demo registration accepted");
                Ok(Outcome {
                    notice: Some(REGISTERED),
                    navigate: Some(View::Login),
                    ..Outcome::default()
                })
            }
            Err(errors) => Ok(Outcome::rejected(errors)),
        },
    }
}
