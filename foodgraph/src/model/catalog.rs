// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Built-in food delivery model

use super::types::{EdgeType, NodeType};

pub(crate) fn food_delivery_nodes() -> Vec<NodeType> {
    vec![
        NodeType::new(
            "Customer",
            &["customer_id", "name", "phone", "address", "join_date"],
            "#60a5fa",
            "👤",
        ),
        NodeType::new(
            "Restaurant",
            &["restaurant_id", "name", "cuisine_type", "rating", "location"],
            "#f472b6",
            "🏪",
        ),
        NodeType::new(
            "Dish",
            &["dish_id", "name", "price", "category", "is_vegetarian"],
            "#fbbf24",
            "🍽️",
        ),
        NodeType::new(
            "DeliveryPerson",
            &["person_id", "name", "phone", "vehicle_type", "rating"],
            "#34d399",
            "🏍️",
        ),
        NodeType::new(
            "Order",
            &["order_id", "order_date", "total_amount", "status", "delivery_time"],
            "#a78bfa",
            "📦",
        ),
    ]
}

pub(crate) fn food_delivery_edges() -> Vec<EdgeType> {
    vec![
        EdgeType::new("Customer", "Order", "PLACES", &["timestamp"]),
        EdgeType::new("Order", "Restaurant", "FROM", &["order_date"]),
        EdgeType::new("Order", "Dish", "CONTAINS", &["quantity", "price"]),
        EdgeType::new(
            "DeliveryPerson",
            "Order",
            "DELIVERS",
            &["pickup_time", "delivery_time"],
        ),
        EdgeType::new("Restaurant", "Dish", "SERVES", &["availability"]),
        EdgeType::new(
            "Customer",
            "Restaurant",
            "REVIEWS",
            &["rating", "comment", "date"],
        ),
    ]
}
