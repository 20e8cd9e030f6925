//! Fixed starter set written by the bootstrap seeder.

use crate::product::Product;

const IMAGE_BASE: &str = "https://loremflickr.com/320/240/";

type Row = (
    i64,
    &'static str,
    &'static str,
    f64,
    &'static str,
    &'static str,
    i64,
    &'static [&'static str],
);

// id, name, category, price, description, image slug, quantity, tags
const STARTER: &[Row] = &[
    (
        1,
        "Ultra HD Smart TV",
        "Electronics",
        799.99,
        "65\" 4K Ultra HD screen, Smart TV with streaming capabilities.",
        "Ultra+HD+Smart+TV",
        10,
        &["tv", "smart", "4k"],
    ),
    (
        2,
        "Professional DSLR Camera",
        "Photography",
        1200.99,
        "24.1 MP DSLR camera with 4K video recording and dual pixel CMOS AF.",
        "DSLR+Camera",
        8,
        &["camera", "dslr", "photography"],
    ),
    (
        3,
        "Wireless Bluetooth Headphones",
        "Audio",
        199.99,
        "Noise-cancelling over-ear headphones with 20 hours of battery life.",
        "Bluetooth+Headphones",
        15,
        &["headphones", "audio", "bluetooth"],
    ),
    (
        4,
        "Smartphone 12 Pro",
        "Electronics",
        999.99,
        "6.1-inch Super Retina XDR display, A14 Bionic chip, 5G capable.",
        "Smartphone+12+Pro",
        20,
        &["smartphone", "electronics", "mobile"],
    ),
    (
        5,
        "Portable External Hard Drive",
        "Computing",
        89.99,
        "1TB external hard drive with USB 3.0 connectivity and durable design.",
        "External+Hard+Drive",
        25,
        &["hard drive", "storage", "computing"],
    ),
    (
        6,
        "Gaming Laptop",
        "Computing",
        1499.99,
        "High-performance laptop with 16GB RAM, 1TB SSD, and dedicated graphics card.",
        "Gaming+Laptop",
        10,
        &["laptop", "gaming", "computing"],
    ),
    (
        7,
        "Wireless Gaming Mouse",
        "Accessories",
        59.99,
        "Ergonomic design with customizable buttons and adjustable DPI settings.",
        "Gaming+Mouse",
        30,
        &["mouse", "gaming", "accessories"],
    ),
    (
        8,
        "Smart Watch",
        "Wearables",
        299.99,
        "Feature-packed smartwatch with fitness tracking, heart rate monitor, and waterproof design.",
        "Smart+Watch",
        15,
        &["smartwatch", "wearables", "fitness"],
    ),
    (
        9,
        "Action Camera",
        "Photography",
        349.99,
        "4K action camera with image stabilization, waterproof casing, and wide-angle lens.",
        "Action+Camera",
        12,
        &["camera", "action", "photography"],
    ),
    (
        10,
        "Tablet Device",
        "Electronics",
        499.99,
        "10.5-inch display tablet with stylus support and powerful processing capabilities.",
        "Tablet+Device",
        18,
        &["tablet", "electronics", "mobile"],
    ),
    (
        11,
        "Wireless Earbuds",
        "Audio",
        129.99,
        "Compact and lightweight earbuds with crystal-clear sound quality and a charging case.",
        "Wireless+Earbuds",
        20,
        &["earbuds", "audio", "wireless"],
    ),
    (
        12,
        "Fitness Tracker",
        "Wearables",
        99.99,
        "Advanced fitness tracker with sleep monitoring, step counting, and calorie tracking.",
        "Fitness+Tracker",
        25,
        &["fitness", "tracker", "wearables"],
    ),
    (
        13,
        "Electric Toothbrush",
        "Personal Care",
        79.99,
        "Rechargeable electric toothbrush with multiple brushing modes and pressure sensor.",
        "Electric+Toothbrush",
        30,
        &["toothbrush", "personal care", "dental"],
    ),
    (
        14,
        "Espresso Machine",
        "Home Appliances",
        249.99,
        "Automatic espresso machine with customizable settings and milk frother.",
        "Espresso+Machine",
        10,
        &["espresso", "coffee", "kitchen"],
    ),
    (
        15,
        "Robot Vacuum",
        "Home Appliances",
        399.99,
        "Smart robot vacuum cleaner with app control and powerful suction.",
        "Robot+Vacuum",
        12,
        &["vacuum", "robot", "cleaning"],
    ),
    (
        16,
        "Bluetooth Speaker",
        "Audio",
        119.99,
        "Portable Bluetooth speaker with long battery life and waterproof design.",
        "Bluetooth+Speaker",
        20,
        &["speaker", "audio", "bluetooth"],
    ),
    (
        17,
        "4K Streaming Device",
        "Electronics",
        49.99,
        "Stream your favorite content in 4K resolution with voice control and HDR support.",
        "4K+Streaming+Device",
        25,
        &["streaming", "4k", "electronics"],
    ),
    (
        18,
        "Mechanical Keyboard",
        "Accessories",
        109.99,
        "Mechanical gaming keyboard with customizable RGB lighting and tactile switches.",
        "Mechanical+Keyboard",
        15,
        &["keyboard", "gaming", "mechanical"],
    ),
    (
        19,
        "Smart Home Hub",
        "Smart Home",
        129.99,
        "Centralized control for your smart home devices with voice command support.",
        "Smart+Home+Hub",
        12,
        &["home", "smart", "hub"],
    ),
    (
        20,
        "High-Performance Blender",
        "Kitchen Appliances",
        199.99,
        "Multi-speed blender with large capacity, perfect for smoothies and soups.",
        "Blender",
        15,
        &["blender", "kitchen", "appliances"],
    ),
    (
        21,
        "Wireless Charger Pad",
        "Accessories",
        39.99,
        "Fast charging wireless pad for smartphones and earbuds.",
        "Wireless+Charger",
        30,
        &["charger", "wireless", "accessories"],
    ),
    (
        22,
        "Smart Home Security Camera",
        "Smart Home",
        149.99,
        "1080p HD security camera with night vision and motion detection.",
        "Security+Camera",
        20,
        &["security", "camera", "smart home"],
    ),
    (
        23,
        "Virtual Reality Headset",
        "Gaming",
        399.99,
        "Immersive VR headset with high-resolution display and built-in audio.",
        "VR+Headset",
        15,
        &["vr", "gaming", "headset"],
    ),
    (
        24,
        "Fitness Yoga Mat",
        "Fitness",
        29.99,
        "Non-slip yoga mat with cushioning for yoga and workout routines.",
        "Yoga+Mat",
        40,
        &["fitness", "yoga", "mat"],
    ),
    (
        25,
        "Electric Kettle",
        "Kitchen Appliances",
        59.99,
        "Stainless steel electric kettle with auto shut-off and boil-dry protection.",
        "Electric+Kettle",
        25,
        &["kettle", "kitchen", "appliances"],
    ),
    (
        26,
        "Gaming Console",
        "Gaming",
        499.99,
        "Next-gen gaming console with 4K resolution and high-speed SSD.",
        "Gaming+Console",
        20,
        &["console", "gaming", "entertainment"],
    ),
    (
        27,
        "LED Desk Lamp",
        "Home Office",
        44.99,
        "Adjustable LED desk lamp with touch control and USB charging port.",
        "Desk+Lamp",
        35,
        &["lamp", "office", "lighting"],
    ),
    (
        28,
        "Portable Projector",
        "Electronics",
        299.99,
        "Compact projector with HD resolution, built-in speakers, and HDMI connectivity.",
        "Portable+Projector",
        18,
        &["projector", "portable", "electronics"],
    ),
    (
        29,
        "Smart Thermostat",
        "Smart Home",
        199.99,
        "Wi-Fi enabled smart thermostat with voice control and energy-saving features.",
        "Smart+Thermostat",
        20,
        &["thermostat", "smart home", "energy"],
    ),
    (
        30,
        "Noise Cancelling Earphones",
        "Audio",
        159.99,
        "High-quality earphones with active noise cancellation and ambient mode.",
        "Noise+Cancelling+Earphones",
        25,
        &["earphones", "audio", "noise cancelling"],
    ),
    (
        31,
        "Wireless Mouse",
        "Computing",
        49.99,
        "Ergonomic wireless mouse with customizable buttons and long battery life.",
        "Wireless+Mouse",
        30,
        &["mouse", "wireless", "computing"],
    ),
    (
        32,
        "Smart Doorbell",
        "Smart Home",
        179.99,
        "Wi-Fi smart doorbell with HD video, two-way audio, and motion detection.",
        "Smart+Doorbell",
        22,
        &["doorbell", "smart home", "security"],
    ),
    (
        33,
        "Compact Refrigerator",
        "Home Appliances",
        189.99,
        "Energy-efficient compact refrigerator with freezer compartment.",
        "Compact+Refrigerator",
        15,
        &["refrigerator", "appliances", "compact"],
    ),
    (
        34,
        "Digital Camera",
        "Photography",
        549.99,
        "Versatile digital camera with high-resolution sensor and versatile zoom lens.",
        "Digital+Camera",
        12,
        &["camera", "digital", "photography"],
    ),
    (
        35,
        "Wireless Keyboard",
        "Computing",
        69.99,
        "Slim wireless keyboard with comfortable keys and long battery life.",
        "Wireless+Keyboard",
        25,
        &["keyboard", "wireless", "computing"],
    ),
    (
        36,
        "Air Purifier",
        "Home Appliances",
        129.99,
        "HEPA air purifier with real-time air quality monitoring and quiet operation.",
        "Air+Purifier",
        20,
        &["air purifier", "home", "health"],
    ),
    (
        37,
        "Digital Photo Frame",
        "Home Decor",
        89.99,
        "High-resolution digital photo frame with Wi-Fi connectivity and cloud storage.",
        "Digital+Photo+Frame",
        30,
        &["photo frame", "digital", "decor"],
    ),
    (
        38,
        "Smart Scale",
        "Fitness",
        59.99,
        "Bluetooth enabled smart scale with body composition analysis.",
        "Smart+Scale",
        25,
        &["scale", "fitness", "smart"],
    ),
    (
        39,
        "Gaming Chair",
        "Gaming",
        249.99,
        "Ergonomic gaming chair with adjustable armrests and lumbar support.",
        "Gaming+Chair",
        15,
        &["chair", "gaming", "comfort"],
    ),
    (
        40,
        "Streaming Webcam",
        "Computing",
        99.99,
        "High-definition webcam with autofocus and built-in microphone for streaming.",
        "Webcam",
        20,
        &["webcam", "streaming", "computing"],
    ),
];

/// The products an empty catalog is seeded with.
pub fn starter_products() -> Vec<Product> {
    STARTER
        .iter()
        .map(|&(id, name, category, price, description, slug, quantity, tags)| {
            Product::new(id, name)
                .with_category(category)
                .with_price(price)
                .with_description(description)
                .with_image_url(format!("{}{}", IMAGE_BASE, slug))
                .with_quantity(quantity)
                .with_tags(tags.iter().copied())
        })
        .collect()
}
