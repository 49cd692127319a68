// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Static prose and code shown on the overview and implementation pages

use crate::error::FoodGraphError;
use std::fmt;

/// A block of page content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Heading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Code {
        language: &'static str,
        text: &'static str,
    },
}

pub const APP_TITLE: &str = "Food Delivery System - Graph Database Demo";
pub const APP_SUBTITLE: &str = "Using LanceGraph / Nebula Graph";

pub const MODEL_DESCRIPTION: &str = "This food delivery system models the complete ecosystem including:";

pub const MODEL_ENTITIES: &[&str] = &[
    "Customers placing orders",
    "Restaurants serving dishes",
    "Dishes being ordered",
    "Delivery Personnel delivering orders",
    "Orders connecting all entities",
];

pub const MODEL_SUMMARY: &str =
    "The graph structure allows efficient traversal of relationships and complex queries.";

pub const KEY_FEATURES: &[&str] = &[
    "Real-time order tracking",
    "Customer preference analysis",
    "Restaurant performance metrics",
    "Delivery optimization",
    "Recommendation systems",
    "Network effect analysis",
];

pub const FOOTER: &[&str] = &[
    "Food Delivery Graph Database Demo",
    "Designed for LanceGraph / Nebula Graph",
    "For Technical Evaluation - Graph Database Assignment",
];

/// Tabs of the implementation page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImplementationTab {
    #[default]
    Setup,
    CodeExamples,
    Deployment,
}

impl ImplementationTab {
    pub const ALL: [ImplementationTab; 3] = [
        ImplementationTab::Setup,
        ImplementationTab::CodeExamples,
        ImplementationTab::Deployment,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ImplementationTab::Setup => "Setup",
            ImplementationTab::CodeExamples => "Code Examples",
            ImplementationTab::Deployment => "Deployment",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ImplementationTab::Setup => "🔧",
            ImplementationTab::CodeExamples => "📝",
            ImplementationTab::Deployment => "🚀",
        }
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            ImplementationTab::Setup => SETUP,
            ImplementationTab::CodeExamples => CODE_EXAMPLES,
            ImplementationTab::Deployment => DEPLOYMENT,
        }
    }
}

impl fmt::Display for ImplementationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.title())
    }
}

impl std::str::FromStr for ImplementationTab {
    type Err = FoodGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "setup" => Ok(ImplementationTab::Setup),
            "2" | "code" | "code-examples" | "examples" => Ok(ImplementationTab::CodeExamples),
            "3" | "deployment" | "deploy" => Ok(ImplementationTab::Deployment),
            _ => Err(FoodGraphError::UnknownTab(s.to_string())),
        }
    }
}

const SCHEMA_DDL: &str = "\
# Create Node Types
CREATE TAG Customer (customer_id string, name string, phone string, address string, join_date date)
CREATE TAG Restaurant (restaurant_id string, name string, cuisine_type string, rating float, location string)
CREATE TAG Dish (dish_id string, name string, price float, category string, is_vegetarian bool)
CREATE TAG DeliveryPerson (person_id string, name string, phone string, vehicle_type string, rating float)
CREATE TAG Order (order_id string, order_date datetime, total_amount float, status string, delivery_time int)

# Create Edge Types
CREATE EDGE PLACES (timestamp datetime)
CREATE EDGE FROM (order_date datetime)
CREATE EDGE CONTAINS (quantity int, price float)
CREATE EDGE DELIVERS (pickup_time datetime, delivery_time datetime)
CREATE EDGE SERVES (availability bool)
CREATE EDGE REVIEWS (rating float, comment string, date datetime)";

const PYTHON_CLIENT: &str = r#"from lancegraph import Graph

# Initialize connection
graph = Graph("food_delivery")

# Insert Customer
graph.execute('''
    INSERT VERTEX Customer (customer_id, name, phone, address, join_date)
    VALUES ("C001", "Alice", "+91-9876543210", "Mumbai, MH", "2024-01-15")
''')

# Insert Order
graph.execute('''
    INSERT VERTEX Order (order_id, order_date, total_amount, status, delivery_time)
    VALUES ("ORD001", "2024-12-29 14:30:00", 450.00, "delivered", 28)
''')

# Create Relationship
graph.execute('''
    INSERT EDGE PLACES (timestamp)
    VALUES ("C001" -> "ORD001", "2024-12-29 14:30:00")
''')

# Query Example
result = graph.execute('''
    MATCH (c:Customer {name: 'Alice'})-[:PLACES]->(o:Order)
    RETURN c.name, o.order_id, o.total_amount
''')

for row in result:
    print(row)"#;

const SETUP: &[Section] = &[
    Section::Heading("Database Setup"),
    Section::Paragraph("LanceGraph Installation:"),
    Section::Code {
        language: "bash",
        text: "pip install lancegraph",
    },
    Section::Paragraph("Nebula Graph Installation:"),
    Section::Code {
        language: "bash",
        text: "# Install Nebula Graph\n\
               docker pull vesoft/nebula-graphd:latest\n\
               docker pull vesoft/nebula-storaged:latest\n\
               docker pull vesoft/nebula-metad:latest",
    },
    Section::Heading("Schema Creation"),
    Section::Code {
        language: "sql",
        text: SCHEMA_DDL,
    },
];

const CODE_EXAMPLES: &[Section] = &[
    Section::Heading("Python Code Examples"),
    Section::Code {
        language: "python",
        text: PYTHON_CLIENT,
    },
];

const DEPLOYMENT: &[Section] = &[
    Section::Heading("Deployment Considerations"),
    Section::Paragraph("Scalability:"),
    Section::Bullets(&[
        "Horizontal Scaling: Distribute graph across multiple nodes",
        "Sharding: Partition by customer regions or restaurant zones",
        "Replication: Multi-master setup for high availability",
    ]),
    Section::Paragraph("Performance Optimization:"),
    Section::Bullets(&[
        "Index frequently queried properties (customer_id, order_id)",
        "Cache hot paths (popular restaurants, frequent customers)",
        "Use connection pooling for concurrent queries",
    ]),
    Section::Paragraph("Monitoring:"),
    Section::Bullets(&[
        "Query performance metrics",
        "Graph size and growth rate",
        "Relationship traversal depth",
        "Cache hit rates",
    ]),
    Section::Paragraph("Use Cases:"),
    Section::Bullets(&[
        "Real-time Recommendations: Suggest dishes based on order history",
        "Fraud Detection: Identify suspicious ordering patterns",
        "Delivery Optimization: Find optimal delivery routes",
        "Customer Segmentation: Group customers by preferences",
        "Restaurant Analytics: Performance and popularity metrics",
    ]),
];
