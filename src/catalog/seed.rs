//! Built-in seed catalog.
//!
//! Used on first run and whenever the persisted catalog is missing or
//! unreadable. Twenty sample records across the storefront's categories.

use crate::entities::Product;
use chrono::{DateTime, Utc};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    description: &str,
    price: f64,
    images: &[&str],
    category: &str,
    brand: &str,
    stock: u32,
    rating: f64,
    discount: u8,
    created_at: &str,
    sizes: &[&str],
    colors: &[&str],
) -> Product {
    let opt = |labels: &[&str]| {
        if labels.is_empty() {
            None
        } else {
            Some(labels.iter().map(ToString::to_string).collect())
        }
    };
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        images: images.iter().map(ToString::to_string).collect(),
        category: category.to_string(),
        brand: brand.to_string(),
        stock,
        rating,
        discount,
        created_at: DateTime::parse_from_rfc3339(created_at)
            .map_or_else(|_| Utc::now(), |t| t.with_timezone(&Utc)),
        sizes: opt(sizes),
        colors: opt(colors),
    }
}

/// Returns the built-in sample catalog in its fixed order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_products() -> Vec<Product> {
    vec![
        entry(
            "prod_1",
            "4K Ultra HD Smart TV",
            "Experience stunning visuals with this 55-inch 4K Ultra HD Smart TV. Features include HDR, built-in streaming apps, and voice control compatibility.",
            699.99,
            &[
                "https://images.pexels.com/photos/6782570/pexels-photo-6782570.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/6782567/pexels-photo-6782567.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/6782342/pexels-photo-6782342.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "electronics",
            "TechVision",
            15,
            4.7,
            10,
            "2023-10-15T10:30:00Z",
            &[],
            &["Black", "Silver"],
        ),
        entry(
            "prod_2",
            "Wireless Noise Cancelling Headphones",
            "Premium wireless headphones with active noise cancellation, 30-hour battery life, and comfortable over-ear design for immersive audio experience.",
            249.99,
            &[
                "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/3394665/pexels-photo-3394665.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "electronics",
            "SoundWave",
            25,
            4.8,
            0,
            "2023-11-05T14:45:00Z",
            &[],
            &["Black", "White", "Blue"],
        ),
        entry(
            "prod_3",
            "Men's Casual Denim Jacket",
            "Classic denim jacket for men with comfortable fit, multiple pockets, and durable construction. Perfect for casual everyday wear.",
            79.99,
            &[
                "https://images.pexels.com/photos/1040945/pexels-photo-1040945.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/1366960/pexels-photo-1366960.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "clothing",
            "UrbanStyle",
            40,
            4.5,
            15,
            "2023-09-20T09:15:00Z",
            &["S", "M", "L", "XL", "XXL"],
            &["Blue", "Black", "Gray"],
        ),
        entry(
            "prod_4",
            "Women's Running Shoes",
            "Lightweight and breathable running shoes with responsive cushioning and durable outsole for optimal performance and comfort.",
            129.99,
            &[
                "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/1670766/pexels-photo-1670766.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "clothing",
            "Athletix",
            30,
            4.6,
            0,
            "2023-10-25T11:20:00Z",
            &["5", "6", "7", "8", "9", "10"],
            &["Black/White", "Pink/Gray", "Blue/Yellow"],
        ),
        entry(
            "prod_5",
            "Stainless Steel Cookware Set",
            "10-piece cookware set including pots, pans, and lids. Made with premium stainless steel for durability and even heat distribution.",
            199.99,
            &[
                "https://images.pexels.com/photos/175761/pexels-photo-175761.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/531139/pexels-photo-531139.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "home",
            "ChefElite",
            20,
            4.7,
            20,
            "2023-08-15T08:30:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_6",
            "Bestselling The Silent Patient",
            "WITH OVER THREE MILLION COPIES SOLD, read the Sunday Times and No.1 New York Times bestselling, record-breaking thriller that everyone is talking about - soon to be a major film.",
            24.99,
            &[
                "https://encrypted-tbn2.gstatic.com/shopping?q=tbn:ANd9GcQ2Ydd-swoYf8RVLcCctgX38PX2ZmO2Em1eSFCccUH8-Nli6P2Qe3J-U_E5wT356l01MhONPNWhN5k3qKGchCFGgt4dbSDXrSlcNbpKr4Q",
            ],
            "books",
            "Orion",
            50,
            4.9,
            0,
            "2023-11-10T15:45:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_7",
            "Interactive Board Game",
            "Family-friendly board game for 2-6 players. Features interactive elements, strategic gameplay, and hours of entertainment for all ages.",
            34.99,
            &[
                "https://images.pexels.com/photos/4691567/pexels-photo-4691567.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/4691566/pexels-photo-4691566.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "toys",
            "GameMaster",
            35,
            4.5,
            0,
            "2023-09-05T13:20:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_8",
            "Smart Fitness Watch",
            "Track your fitness goals with this advanced smartwatch. Features heart rate monitoring, sleep tracking, GPS, and water resistance.",
            179.99,
            &[
                "https://images.pexels.com/photos/393047/pexels-photo-393047.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "electronics",
            "FitTech",
            25,
            4.6,
            15,
            "2023-10-01T10:15:00Z",
            &[],
            &["Black", "Blue", "Pink"],
        ),
        entry(
            "prod_9",
            "Organic Cotton Bedding Set",
            "Luxurious 100% organic cotton bedding set including duvet cover, fitted sheet, and pillowcases. Soft, breathable, and eco-friendly.",
            149.99,
            &[
                "https://images.pexels.com/photos/1743229/pexels-photo-1743229.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/1329711/pexels-photo-1329711.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "home",
            "EcoHome",
            20,
            4.8,
            0,
            "2023-09-15T11:30:00Z",
            &["Twin", "Full", "Queen", "King"],
            &["White", "Gray", "Blue", "Sage"],
        ),
        entry(
            "prod_10",
            "Professional Blender",
            "High-performance blender with multiple speed settings, pulse function, and durable blades for smoothies, soups, and more.",
            129.99,
            &[
                "https://images.pexels.com/photos/3735208/pexels-photo-3735208.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/4006433/pexels-photo-4006433.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "home",
            "KitchenPro",
            15,
            4.7,
            10,
            "2023-08-20T09:45:00Z",
            &[],
            &["Black", "Silver", "Red"],
        ),
        entry(
            "prod_11",
            "Children's Educational Tablet",
            "Kid-friendly tablet with educational apps, games, and parental controls. Durable design and long battery life for learning on the go.",
            149.99,
            &[
                "https://images.pexels.com/photos/1262412/pexels-photo-1262412.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/5790755/pexels-photo-5790755.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "electronics",
            "LearnTech",
            25,
            4.5,
            0,
            "2023-10-10T14:20:00Z",
            &[],
            &["Blue", "Pink", "Green"],
        ),
        entry(
            "prod_12",
            "Wooden Building Blocks Set",
            "Set of 100 colorful wooden building blocks in various shapes and sizes. Perfect for developing creativity and motor skills in children.",
            39.99,
            &[
                "https://images.pexels.com/photos/1148998/pexels-photo-1148998.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/5173316/pexels-photo-5173316.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "toys",
            "KidWonder",
            30,
            4.9,
            0,
            "2023-09-25T12:10:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_13",
            "Professional Camera with Lens Kit",
            "Digital SLR camera with 24.1MP sensor, 4K video recording, and included 18-55mm lens. Perfect for photography enthusiasts and professionals.",
            899.99,
            &[
                "https://images.pexels.com/photos/90946/pexels-photo-90946.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/51383/photo-camera-subject-photographer-51383.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "electronics",
            "OptiPro",
            10,
            4.8,
            5,
            "2023-08-05T11:15:00Z",
            &[],
            &["Black"],
        ),
        entry(
            "prod_14",
            "Women's Leather Handbag",
            "Elegant leather handbag with spacious interior, multiple compartments, and adjustable shoulder strap. Stylish and functional for everyday use.",
            159.99,
            &[
                "https://images.pexels.com/photos/1152077/pexels-photo-1152077.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/5462562/pexels-photo-5462562.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "clothing",
            "LuxeStyle",
            20,
            4.7,
            0,
            "2023-10-20T13:40:00Z",
            &[],
            &["Black", "Brown", "Tan", "Red"],
        ),
        entry(
            "prod_15",
            "Men's Classic Chronograph Watch",
            "Sophisticated stainless steel watch with chronograph function, date display, and water resistance. Timeless design for any occasion.",
            199.99,
            &[
                "https://images.pexels.com/photos/190819/pexels-photo-190819.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/277390/pexels-photo-277390.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "clothing",
            "TimeMaster",
            15,
            4.6,
            10,
            "2023-09-10T10:30:00Z",
            &[],
            &["Silver", "Gold", "Black"],
        ),
        entry(
            "prod_16",
            "Ergonomic Office Chair",
            "Adjustable office chair with lumbar support, breathable mesh back, and comfortable cushion. Designed for long hours of comfortable work.",
            249.99,
            &[
                "https://images.pexels.com/photos/1957478/pexels-photo-1957478.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/6489601/pexels-photo-6489601.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "home",
            "ComfortWork",
            10,
            4.5,
            15,
            "2023-08-25T15:20:00Z",
            &[],
            &["Black", "Gray", "Blue"],
        ),
        entry(
            "prod_17",
            "Organic Basmati Rice (5kg)",
            "Premium quality aged basmati rice. Long-grain, aromatic, and perfect for biryanis and pulao.",
            599.0,
            &[
                "https://images.pexels.com/photos/4110251/pexels-photo-4110251.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/7421213/pexels-photo-7421213.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "grocery",
            "OrganicIndia",
            100,
            4.8,
            10,
            "2024-03-10T10:30:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_18",
            "Mixed Dal Pack",
            "Assorted pack of 5 different dals: Toor, Moong, Masoor, Urad, and Chana. Each pack 500g.",
            449.0,
            &[
                "https://images.pexels.com/photos/4198836/pexels-photo-4198836.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/6157059/pexels-photo-6157059.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "grocery",
            "PurePulse",
            75,
            4.6,
            0,
            "2024-03-09T15:45:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_19",
            "Natural Face Care Kit",
            "Complete skincare kit with cleanser, toner, moisturizer, and face pack. Made with natural ingredients.",
            1299.0,
            &[
                "https://images.pexels.com/photos/3735619/pexels-photo-3735619.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/3737586/pexels-photo-3737586.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "beauty",
            "Ayurveda Essentials",
            30,
            4.7,
            15,
            "2024-03-08T09:20:00Z",
            &[],
            &[],
        ),
        entry(
            "prod_20",
            "Herbal Hair Oil",
            "Traditional herbal hair oil with coconut, amla, and bhringraj. Promotes hair growth and prevents hair fall.",
            399.0,
            &[
                "https://images.pexels.com/photos/4465124/pexels-photo-4465124.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                "https://images.pexels.com/photos/4465831/pexels-photo-4465831.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            ],
            "beauty",
            "Ayurveda Essentials",
            50,
            4.9,
            0,
            "2024-03-07T14:15:00Z",
            &[],
            &[],
        ),
    ]
}
