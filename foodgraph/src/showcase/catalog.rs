// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Built-in query examples with hand-authored results

use super::table::{CellValue, ResultTable};
use super::QueryExample;

fn text(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

fn ints(values: &[i64]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::Integer(*v)).collect()
}

fn floats(values: &[f64]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::Float(*v)).collect()
}

pub(crate) fn food_delivery_queries() -> Vec<QueryExample> {
    vec![
        QueryExample::cypher(
            "Find all orders by a customer",
            "Retrieve all orders placed by customer \"Alice\"",
            "MATCH (c:Customer {name: 'Alice'})-[:PLACES]->(o:Order)\n\
             RETURN c.name, o.order_id, o.total_amount, o.status",
            ResultTable::authored(vec![
                ("customer", text(&["Alice", "Alice"])),
                ("order_id", text(&["ORD001", "ORD005"])),
                ("amount", ints(&[450, 320])),
                ("status", text(&["delivered", "in_transit"])),
            ]),
        ),
        QueryExample::cypher(
            "Find dishes from a restaurant",
            "Get all dishes served by \"Spice Garden\"",
            "MATCH (r:Restaurant {name: 'Spice Garden'})-[:SERVES]->(d:Dish)\n\
             RETURN r.name, d.name, d.price, d.category",
            ResultTable::authored(vec![
                ("restaurant", text(&["Spice Garden", "Spice Garden"])),
                ("dish", text(&["Butter Chicken", "Paneer Tikka"])),
                ("price", ints(&[280, 220])),
                ("category", text(&["Main Course", "Appetizer"])),
            ]),
        ),
        QueryExample::cypher(
            "Track order delivery chain",
            "Complete delivery chain for an order",
            "MATCH (c:Customer)-[:PLACES]->(o:Order)-[:FROM]->(r:Restaurant),\n      \
             (o)-[:CONTAINS]->(d:Dish),\n      \
             (dp:DeliveryPerson)-[:DELIVERS]->(o)\n\
             WHERE o.order_id = 'ORD001'\n\
             RETURN c.name, r.name, d.name, dp.name, o.status",
            ResultTable::authored(vec![
                ("customer", text(&["Alice"])),
                ("restaurant", text(&["Spice Garden"])),
                ("dish", text(&["Butter Chicken"])),
                ("delivery_person", text(&["Raj"])),
                ("status", text(&["delivered"])),
            ]),
        ),
        QueryExample::cypher(
            "Find highly rated restaurants",
            "Restaurants with average rating > 4.5",
            "MATCH (c:Customer)-[r:REVIEWS]->(rest:Restaurant)\n\
             WHERE r.rating >= 4.5\n\
             RETURN rest.name, rest.cuisine_type, AVG(r.rating) as avg_rating\n\
             ORDER BY avg_rating DESC",
            ResultTable::authored(vec![
                ("restaurant", text(&["Spice Garden", "Pizza Paradise"])),
                ("cuisine", text(&["Indian", "Italian"])),
                ("avg_rating", floats(&[4.7, 4.6])),
            ]),
        ),
        QueryExample::cypher(
            "Delivery person performance",
            "Find all orders delivered by a specific person",
            "MATCH (dp:DeliveryPerson {name: 'Raj'})-[del:DELIVERS]->(o:Order)\n\
             RETURN dp.name, COUNT(o) as total_deliveries,\n       \
             AVG(del.delivery_time) as avg_delivery_time",
            ResultTable::authored(vec![
                ("delivery_person", text(&["Raj"])),
                ("total_deliveries", ints(&[15])),
                ("avg_delivery_time", text(&["28 mins"])),
            ]),
        ),
        QueryExample::cypher(
            "Customer preferences",
            "Find most ordered dish categories by customer",
            "MATCH (c:Customer {name: 'Alice'})-[:PLACES]->(o:Order)-[:CONTAINS]->(d:Dish)\n\
             RETURN d.category, COUNT(d) as order_count\n\
             ORDER BY order_count DESC",
            ResultTable::authored(vec![
                ("category", text(&["Main Course", "Dessert", "Appetizer"])),
                ("count", ints(&[8, 5, 3])),
            ]),
        ),
    ]
}
