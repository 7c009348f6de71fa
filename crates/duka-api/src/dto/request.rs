//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Product create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    /// Product name.
    #[validate(length(min = 1, max = 255))]
    pub product_name: String,
    /// Unit price in minor currency units.
    #[validate(range(min = 0))]
    pub price: i64,
    /// How the price is quoted.
    #[validate(length(min = 1))]
    pub price_type: String,
    /// Product category.
    #[validate(length(min = 1))]
    pub category: String,
    /// Units in stock.
    #[validate(range(min = 0))]
    pub stock: i32,
    /// Stored image filename.
    #[validate(length(min = 1, message = "No image selected"))]
    pub image: String,
}

/// A cart line within an order request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CartItemRequest {
    /// Product to purchase.
    pub product_id: Uuid,
    /// Quantity to purchase.
    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Order creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// Checkout request id issued by the payment provider.
    #[validate(length(min = 1))]
    pub checkout_request_id: String,
    /// Cart lines.
    #[validate(length(min = 1, message = "Cart must not be empty"), nested)]
    pub cart: Vec<CartItemRequest>,
    /// Total payable in minor currency units.
    #[validate(range(min = 0))]
    pub amount: i64,
    /// Shipping cost in minor currency units.
    #[validate(range(min = 0))]
    pub shipping: i64,
}

/// Favorite create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRequest {
    /// Product to favorite.
    pub product_id: Uuid,
}

/// Address create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressRequest {
    /// Recipient first name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Recipient last name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Primary contact number.
    #[validate(length(min = 7, max = 20))]
    pub mobile_phone_number: String,
    /// Optional secondary contact number.
    pub alternate_phone_number: Option<String>,
    /// Street / building delivery address.
    #[validate(length(min = 1, max = 255))]
    pub delivery_address: String,
    /// County.
    #[validate(length(min = 1, max = 100))]
    pub county: String,
    /// Town.
    #[validate(length(min = 1, max = 100))]
    pub town: String,
}

/// Default-address request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultAddressRequest {
    /// The address to mark as default.
    pub address_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_short_password() {
        let req = RegisterRequest {
            username: "wanjiku".to_string(),
            email: "wanjiku@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let req = RegisterRequest {
            username: "wanjiku".to_string(),
            email: "not-an-email".to_string(),
            password: "long-enough-password".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_order_rejects_empty_cart() {
        let req = CreateOrderRequest {
            checkout_request_id: "ws_CO_123".to_string(),
            cart: vec![],
            amount: 1000,
            shipping: 200,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_order_rejects_zero_quantity_line() {
        let req = CreateOrderRequest {
            checkout_request_id: "ws_CO_123".to_string(),
            cart: vec![CartItemRequest {
                product_id: Uuid::new_v4(),
                quantity: 0,
            }],
            amount: 1000,
            shipping: 200,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_product_passes() {
        let req = ProductRequest {
            product_name: "Sukuma Wiki".to_string(),
            price: 5000,
            price_type: "per kg".to_string(),
            category: "vegetables".to_string(),
            stock: 40,
            image: "sukuma.jpg".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
