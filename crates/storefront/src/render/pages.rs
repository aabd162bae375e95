//! Full page documents.
//!
//! Pages share `base.html`: a header with the navigation toggle
//! (`.nav-toggle` controlling `#nav-menu`), an optional notice, and a footer
//! whose `#year` holds the current year. Forms carry one
//! `<span class="error" data-for="...">` per field, filled from the last
//! submission's [`FieldErrors`].

use askama::Template;

use super::{OrderView, ProductView, ReviewView, WishlistView, views};
use crate::error::Result;
use crate::filters;
use crate::reports::ReportCounts;
use crate::shop::{Clock, Shop};
use crate::store::KeyValueStore;
use crate::validate::{FieldErrors, LoginForm, RegisterForm, ReviewForm};

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
}

impl View {
    /// File name the page is served as.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Login => "login.html",
            Self::Register => "register.html",
        }
    }
}

/// Transient page state: the last notice and what the user typed.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub notice: Option<String>,
    pub errors: FieldErrors,
    pub review: ReviewForm,
    pub login: LoginForm,
    pub register: RegisterForm,
}

/// Home page template.
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub notice: Option<String>,
    pub products: Vec<ProductView>,
    pub orders: Vec<OrderView>,
    pub wishlist: Vec<WishlistView>,
    pub reviews: Vec<ReviewView>,
    pub reports: ReportCounts,
    pub errors: FieldErrors,
    pub review_form: ReviewForm,
}

/// Login page template.
#[derive(Template)]
#[template(path = "pages/login.html")]
pub struct LoginTemplate {
    pub notice: Option<String>,
    pub errors: FieldErrors,
    pub email: String,
}

/// Register page template.
#[derive(Template)]
#[template(path = "pages/register.html")]
pub struct RegisterTemplate {
    pub notice: Option<String>,
    pub errors: FieldErrors,
    pub name: String,
    pub email: String,
}

/// Render `view` as a full HTML document. Password fields are never
/// prefilled.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the template fails.
pub fn render_page<B: KeyValueStore, C: Clock>(
    shop: &Shop<B, C>,
    view: View,
    state: PageState,
) -> Result<String> {
    let PageState {
        notice,
        errors,
        review,
        login,
        register,
    } = state;

    let html = match view {
        View::Home => HomeTemplate {
            notice,
            products: views(&shop.products()?),
            orders: views(&shop.orders()?),
            wishlist: views(&shop.wishlist()?),
            reviews: views(&shop.reviews()?),
            reports: shop.reports()?,
            errors,
            review_form: review,
        }
        .render()?,
        View::Login => LoginTemplate {
            notice,
            errors,
            email: login.email,
        }
        .render()?,
        View::Register => RegisterTemplate {
            notice,
            errors,
            name: register.name,
            email: register.email,
        }
        .render()?,
    };
    Ok(html)
}
