use chrono::{Duration, Utc};

use crate::models::{
    Account, CategorySales, CustomerTotal, DailyRevenue, HistoryLine, HistoryOrder, Order,
    OrderLine, Product, ReportTables, Role,
};
use crate::repo::{
    AccountRepository, CatalogPage, CatalogQuery, CatalogRepository, OrderRepository, ProductSort,
    ReportRepository,
};

/// In-memory credential directory, fixed at process start.
pub struct MemoryDirectory {
    accounts: Vec<Account>,
}

impl MemoryDirectory {
    pub fn seeded() -> Self {
        let accounts = vec![
            Account {
                id: "1".into(),
                name: "Admin User".into(),
                email: "admin@example.com".into(),
                password: "AdminPass123!".into(),
                role: Role::Admin,
            },
            Account {
                id: "2".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
                password: "Password123!".into(),
                role: Role::Customer,
            },
        ];
        Self { accounts }
    }
}

impl AccountRepository for MemoryDirectory {
    fn authenticate(&self, email: &str, password: &str) -> Option<Account> {
        self.accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .cloned()
    }
}

/// In-memory catalog, fixed at process start.
pub struct MemoryCatalog {
    products: Vec<Product>,
}

fn product(
    id: &str,
    sku: &str,
    name: &str,
    price: f64,
    category: &str,
    description: &str,
    rating: f64,
) -> Product {
    Product {
        id: id.into(),
        sku: sku.into(),
        name: name.into(),
        price,
        category: category.into(),
        description: description.into(),
        rating,
    }
}

impl MemoryCatalog {
    pub fn seeded() -> Self {
        let products = vec![
            product(
                "1",
                "PROD001",
                "Wireless Headphones",
                199.99,
                "electronics",
                "Premium noise-cancelling headphones",
                4.5,
            ),
            product(
                "2",
                "PROD002",
                "Cotton T-Shirt",
                29.99,
                "clothing",
                "Comfortable cotton t-shirt",
                4.0,
            ),
            product(
                "3",
                "PROD003",
                "Programming Book",
                49.99,
                "books",
                "Learn web development",
                4.8,
            ),
            product(
                "4",
                "PROD004",
                "Office Chair",
                299.99,
                "home",
                "Ergonomic office chair",
                4.2,
            ),
            product(
                "5",
                "PROD005",
                "Wireless Mouse",
                39.99,
                "electronics",
                "Precision wireless mouse",
                4.3,
            ),
            product(
                "6",
                "PROD006",
                "Denim Jeans",
                69.99,
                "clothing",
                "Classic blue denim",
                4.1,
            ),
        ];
        Self { products }
    }
}

impl CatalogRepository for MemoryCatalog {
    fn list(&self, query: &CatalogQuery) -> CatalogPage {
        let mut filtered: Vec<Product> = self
            .products
            .iter()
            .filter(|p| match query.category.as_deref() {
                Some(category) if !category.is_empty() => p.category == category,
                _ => true,
            })
            .filter(|p| match query.search.as_deref() {
                Some(search) if !search.is_empty() => {
                    p.name.to_lowercase().contains(&search.to_lowercase())
                }
                _ => true,
            })
            .cloned()
            .collect();

        match query.sort {
            Some(ProductSort::PriceAsc) => {
                filtered.sort_by(|a, b| a.price.total_cmp(&b.price));
            }
            Some(ProductSort::PriceDesc) => {
                filtered.sort_by(|a, b| b.price.total_cmp(&a.price));
            }
            Some(ProductSort::NameAsc) => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
            None => {}
        }

        // `total` is the filtered count, before the page slice.
        let total = filtered.len() as i64;
        let start = ((query.page - 1) * query.limit).max(0) as usize;
        let products: Vec<Product> = filtered
            .into_iter()
            .skip(start)
            .take(query.limit.max(0) as usize)
            .collect();

        CatalogPage {
            products,
            total,
            page: query.page,
            limit: query.limit,
        }
    }

    fn by_ids(&self, ids: &[String]) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }
}

/// Mock ledger: fabricates orders on read and on create, stores nothing.
pub struct MemoryLedger;

impl OrderRepository for MemoryLedger {
    fn create(&self, items: Vec<OrderLine>, total: f64) -> Order {
        Order {
            id: format!("ORD-{}", Utc::now().timestamp_millis()),
            total,
            items,
            created_at: Utc::now(),
            status: "completed".into(),
        }
    }

    // TODO: scope history to the authenticated account once orders are
    // actually persisted; today every caller sees the same fabricated order.
    fn history(&self) -> Vec<HistoryOrder> {
        vec![HistoryOrder {
            id: "ORD-123456".into(),
            total: 299.98,
            created_at: Utc::now() - Duration::days(1),
            status: "completed".into(),
            items: vec![
                HistoryLine {
                    id: "1".into(),
                    product_name: "Wireless Headphones".into(),
                    quantity: 1,
                    price_at_purchase: 199.99,
                },
                HistoryLine {
                    id: "2".into(),
                    product_name: "Cotton T-Shirt".into(),
                    quantity: 5,
                    price_at_purchase: 29.99,
                },
            ],
        }]
    }
}

/// Mock aggregator: fixed literal tables, no computation from ledger data.
pub struct MemoryReports;

impl ReportRepository for MemoryReports {
    fn tables(&self) -> ReportTables {
        ReportTables {
            daily_revenue: vec![
                DailyRevenue {
                    date: "2024-01-15".into(),
                    total: 1250.50,
                },
                DailyRevenue {
                    date: "2024-01-16".into(),
                    total: 1890.75,
                },
                DailyRevenue {
                    date: "2024-01-17".into(),
                    total: 2150.00,
                },
            ],
            category_wise_sales: vec![
                CategorySales {
                    category: "electronics".into(),
                    count: 45,
                },
                CategorySales {
                    category: "clothing".into(),
                    count: 32,
                },
                CategorySales {
                    category: "books".into(),
                    count: 28,
                },
                CategorySales {
                    category: "home".into(),
                    count: 18,
                },
            ],
            top_customers: vec![
                CustomerTotal {
                    name: "John Doe".into(),
                    total: 1250.75,
                },
                CustomerTotal {
                    name: "Jane Smith".into(),
                    total: 890.50,
                },
                CustomerTotal {
                    name: "Bob Johnson".into(),
                    total: 750.25,
                },
            ],
        }
    }
}
