//! Built-in catalog tables, in display order.

use super::builder::product;
use crate::domain::entities::{Category, IconKind::*, ProductRecord};

const BERRYTEC_LOGO: Option<&str> = Some("/Berrytec.png");
const BLUESEN_LOGO: Option<&str> = Some("/Bluesen.png");
const JINSP_LOGO: Option<&str> = Some("/JINSP.png");
const FOUR_MORE_LOGO: Option<&str> = Some("/4more.png");
const LEANCAT_WE_LOGO: Option<&str> = Some("/LeancatElectro.png");
const LEANCAT_LOGO: Option<&str> = Some("/LEANCAT.png");
const KOLIBRIK_LOGO: Option<&str> = Some("/Kolibrik2.avif");

pub(super) fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new("lab-water-purification-system", lab_water_purification()),
        Category::new("raman-spectroscopy", raman_spectroscopy()),
        Category::new("lab-furniture", lab_furniture()),
        Category::new("electrolyzers", electrolyzers()),
        Category::new("electrolyzer-test-stations", electrolyzer_test_stations()),
        Category::new("battery-fuel-cell-test-systems", battery_fuel_cell_test_systems()),
    ]
}

fn lab_water_purification() -> Vec<ProductRecord> {
    vec![
        product("Online TOC Analyzer BerryPURE TOC", "Continuous Water Quality Monitoring")
            .description("A precision instrument designed for the continuous monitoring of Total Organic Carbon in purified water systems. It ensures strict compliance with pharmaceutical standards such as USP <643> and EP 2.2.44 through reagent-free UV oxidation technology.")
            .image("https://images.squarespace-cdn.com/content/v1/5c76c9137fdcb8facd7603f4/d66d51a1-4f8d-4773-8a5c-182d03550dec/TOC.png")
            .partner("Berrytec", BERRYTEC_LOGO)
            .link("https://www.berrytec.net/en/berrypure-toc")
            .feature(Gauge, "Real-time Analysis", "Instant TOC readings")
            .feature(Shield, "Compliance Ready", "USP <643> and EP 2.2.44 compliant")
            .feature(Zap, "Low Maintenance", "Reagent-free oxidation technology")
            .specs(["Range: 0.5 to 1000 ppb", "Response Time: < 1 min", "Touchscreen Interface"])
            .build(),
        product("BerryPURE mini", "Compact Lab Water Solution")
            .description("Engineered for laboratories with limited bench space, the BerryPURE mini delivers consistent Type I and Type II water quality. It is an optimal choice for general chemistry, buffer preparation, and glassware rinsing applications.")
            .image("https://images.squarespace-cdn.com/content/v1/5c76c9137fdcb8facd7603f4/9deb3416-b768-405a-8b5f-ede41c3c0261/Ultra+Pure+Water+Type+1+Berrypure+Mini+Series.jpg")
            .partner("Berrytec", BERRYTEC_LOGO)
            .link("https://www.berrytec.net/en/purewater")
            .feature(Settings, "Space Saving", "Ultra-compact design for tight spaces")
            .feature(Zap, "Efficient", "Low energy consumption")
            .feature(Shield, "Reliable", "Consistent water quality")
            .specs(["Output: 5L/hr", "Conductivity: < 0.1 µS/cm", "Dimensions: Compact Footprint"])
            .build(),
        product("BerryPURE RO + EDI", "Advanced Purification Technology")
            .description("This system combines Reverse Osmosis with Electro-Deionization (EDI) to produce superior grade water without the need for chemical regeneration. It is designed to minimize wastewater while maintaining high resistivity levels.")
            .image("https://images.squarespace-cdn.com/content/v1/5c76c9137fdcb8facd7603f4/1567580253099-9UFFK0Q9PLD37NJHE812/RO.png")
            .partner("Berrytec", BERRYTEC_LOGO)
            .link("https://www.berrytec.net/en/ro-class-edi")
            .feature(Gauge, "High Purity", "Consistent Type II water")
            .feature(Zap, "Eco-Friendly", "Low wastewater recovery")
            .feature(Cpu, "Automated", "Fully automatic operation")
            .specs(["Tech: RO + EDI", "Resistivity: > 5 MΩ-cm", "TOC: < 30 ppb"])
            .build(),
        product("BerryPURE ULTRA", "Ultrapure Water System")
            .description("The BerryPURE ULTRA is built for the most critical laboratory applications, including HPLC, GC-MS, and molecular biology. It utilizes dual-wavelength UV oxidation to ensure virtually zero organic contaminants.")
            .image("https://images.squarespace-cdn.com/content/v1/5c76c9137fdcb8facd7603f4/1551781291255-T5DAZF4WPLHSBDXWNTN1/sgkUltra")
            .partner("Berrytec", BERRYTEC_LOGO)
            .link("https://www.berrytec.net/en/sgkultra")
            .feature(Shield, "Critical Grade", "For analytical applications")
            .feature(Thermometer, "UV Oxidation", "Dual wavelength UV lamp")
            .feature(Gauge, "Monitoring", "Real-time TOC monitoring")
            .specs(["Type: Ultrapure Type I", "Resistivity: 18.2 MΩ-cm", "TOC: < 5 ppb"])
            .build(),
        product("BerryPURE Tower", "High Volume Production")
            .description("A robust floor-standing unit designed to meet the demands of facilities with high daily water consumption. It can serve as a central supply unit feeding multiple laboratory points or washing machines.")
            .image("https://images.squarespace-cdn.com/content/v1/5c76c9137fdcb8facd7603f4/1567579009015-UPUAHFDXNDPPUTYO3CLV/Berrypure%C2%AE+Tower")
            .partner("Berrytec", BERRYTEC_LOGO)
            .link("https://www.berrytec.net/en/sutower")
            .feature(Zap, "High Capacity", "High flow rates available")
            .feature(Settings, "Robust", "Heavy-duty construction")
            .feature(Cpu, "Centralized", "Can feed multiple points")
            .specs(["Output: Up to 100L/hr", "Tank: Integrated or External", "Mounting: Floor"])
            .build(),
        product("BerryPURE COMPACT", "All-in-One Benchtop Unit")
            .description("A versatile all-in-one system that connects directly to a tap water source to produce both Type I and Type II water. Features an intuitive digital interface for easy volumetric dispensing.")
            .image("https://images.squarespace-cdn.com/content/v1/5c76c9137fdcb8facd7603f4/882f270b-9dfc-4e43-ba1b-8baa65bb93b8/compact.png")
            .partner("Berrytec", BERRYTEC_LOGO)
            .link("https://www.berrytec.net/en/compact")
            .feature(Settings, "Dual Output", "Type I and Type II water")
            .feature(Gauge, "User Friendly", "Intuitive digital display")
            .feature(Shield, "Easy Maintenance", "Quick cartridge change")
            .specs(["Feed: Potable Tap Water", "Resistivity: 18.2 MΩ-cm", "Dispensing: Manual/Volumetric"])
            .build(),
        product("Water Quality Analyzer", "Comprehensive Multiparameter Testing")
            .description("This multiparameter analyzer offers simultaneous measurement of pH, conductivity, and TOC. Its robust IP54 enclosure makes it suitable for demanding lab environments where rapid diagnostics are required.")
            .image("https://www.bluesen.com/en/images/sub/product/img_aqua2000_5x.png")
            .partner("Bluesen", BLUESEN_LOGO)
            .link("https://www.bluesen.com/en/product/product1.asp")
            .feature(Gauge, "Multiparameter", "pH, Conductivity, TOC in one")
            .feature(Shield, "Robust Design", "IP54 rated enclosure")
            .feature(Zap, "Rapid Results", "Full profile in under 3 mins")
            .specs(["pH Range: 0-14", "Conductivity: 0.055 µS/cm", "Power: 110/220V"])
            .build(),
    ]
}

fn raman_spectroscopy() -> Vec<ProductRecord> {
    vec![
        product("Online Raman Analyzer", "Process Analytical Technology")
            .description("A multi-channel system engineered for in-situ process monitoring. It enables real-time chemical composition analysis in bioprocessing and pharmaceutical production lines without interrupting the workflow.")
            .image("https://www.jinsptech.com/uploads/RS2000-4RS2100-4.png")
            .partner("JINSP", JINSP_LOGO)
            .link("https://www.jinsptech.com/multi-channel-online-raman-analyzer-for-liquids/")
            .feature(Zap, "Real-time Kinetics", "Track reactions as they happen")
            .feature(Shield, "Non-Invasive", "No sample preparation needed")
            .feature(Cpu, "Automated Software", "Chemometric modeling included")
            .specs(["Laser: 532nm / 785nm", "Resolution: 4 cm-1", "Fiber Optic Probe"])
            .build(),
        product("Hand Held Raman Spectrometer", "Portable Material Identification")
            .description("This rugged, lightweight device brings laboratory-grade spectroscopy to the field. It is specifically designed for the rapid identification of raw materials, narcotics, and explosives with immediate pass/fail results.")
            .image("https://www.jinsptech.com/uploads/products-1.jpg")
            .partner("JINSP", JINSP_LOGO)
            .link("https://www.jinsptech.com/handheld-raman-spectrometer-2/")
            .feature(Gauge, "Point & Shoot", "Results in seconds")
            .feature(Shield, "Library Matching", "12,000+ compound database")
            .feature(Settings, "Wireless Sync", "Cloud data backup")
            .specs(["Weight: < 1kg", "Battery: 8 hours", "Certification: IP68"])
            .build(),
        product("Miniature Spectrometer", "Compact Optical Bench")
            .description("Offering high optical resolution in a small footprint, this spectrometer is ideal for OEM integration and educational setups. It features a reliable CCD array detector ensuring thermal stability and low stray light.")
            .image("https://cdn.globalso.com/jinsptech/products2.jpg")
            .partner("JINSP", JINSP_LOGO)
            .link("https://www.jinsptech.com/sr50c-sr75c-miniature-spectrometer-product/")
            .feature(Settings, "Modular Design", "Interchangeable slits")
            .feature(Zap, "Fast Integration", "1ms to 10s integration time")
            .feature(Thermometer, "Thermal Stability", "Low thermal drift")
            .specs(["Range: 200-1100nm", "Detector: CCD Array", "Interface: USB 3.0"])
            .build(),
    ]
}

fn lab_furniture() -> Vec<ProductRecord> {
    vec![
        product("Fume Hood", "Operator Safety Priority")
            .description("High-performance containment systems designed to protect laboratory personnel from hazardous fumes and vapors. Features advanced aerodynamics and digital airflow monitoring to ensure strict safety compliance.")
            .image("https://images.squarespace-cdn.com/content/v1/5806092420099efa03a2080c/c30531b6-68d4-47f2-8bb5-fe7dadff0dbe/stellaair25_D.jpeg")
            .partner("4 more Labor", FOUR_MORE_LOGO)
            .link("https://www.4morelabor.com/en/filter-fume-cupboard")
            .feature(Shield, "Airflow Monitor", "Digital face velocity display")
            .feature(Settings, "Sash Management", "Auto-closing safety sash")
            .feature(Zap, "Energy Efficient", "Low volume constant flow")
            .specs(["Width: 4ft / 6ft / 8ft", "Liner: Phenolic Resin", "Compliance: ASHRAE 110"])
            .build(),
        product("Lab Furniture", "Ergonomic Workspace Solutions")
            .description("A modular furniture system featuring heavy-duty steel frames and chemical-resistant surfaces. Designed for flexibility, allowing laboratories to reconfigure layouts as research needs evolve.")
            .image("https://www.lumbersteel.com.my/images/blog/Lumbersteel.jpg#joomlaImage://local-images/blog/Lumbersteel.jpg?width=900&height=560")
            .partner("4 more Labor", FOUR_MORE_LOGO)
            .link("https://www.4morelabor.com/en/home")
            .feature(Gauge, "Load Bearing", "Heavy duty steel frames")
            .feature(Shield, "Chemical Resistant", "Epoxy powder coating")
            .feature(Settings, "Modular", "Reconfigurable layout")
            .specs(["Material: SEFA 8 Steel", "Countertop: Granite/Epoxy", "Custom Colors"])
            .build(),
    ]
}

fn electrolyzers() -> Vec<ProductRecord> {
    vec![
        product("Water Electrolyzers", "Green Hydrogen Production")
            .description("Advanced electrolysis systems utilizing PEM and Alkaline technologies to facilitate efficient, on-site green hydrogen generation for both industrial and research applications.")
            .image("https://leancatwe.com/wp-content/uploads/2024/05/hex_2.png")
            .partner("Leancat Electrolyzers", LEANCAT_WE_LOGO)
            .link("https://leancatwe.com/water-electrolyzers/")
            .feature(Zap, "High Efficiency", "Optimized stack design")
            .feature(Shield, "Safety Systems", "Integrated leak detection")
            .feature(Cpu, "Remote Monitoring", "IoT enabled control")
            .specs(["Output: 1-100 Nm3/hr", "Purity: 99.999%", "Pressure: 30 bar"])
            .build(),
        product("Hydrogen Generators", "Industrial Scale Solutions")
            .description("Scalable hydrogen production units designed for high-capacity industrial needs and renewable energy storage. Capable of continuous operation with advanced thermal management systems.")
            .image("https://leancatwe.com/wp-content/uploads/2025/03/rack_new-1024x1024.png")
            .partner("Leancat Electrolyzers", LEANCAT_WE_LOGO)
            .link("https://leancatwe.com/hydrogen-generators/")
            .feature(Gauge, "Scalable", "MW scale capability")
            .feature(Thermometer, "Thermal Mgmt", "Advanced cooling loops")
            .feature(Shield, "Robustness", "Designed for 24/7 operation")
            .specs(["Capacity: 1-5 MW", "Technology: PEM", "Lifetime: >80,000 hrs"])
            .build(),
        product("Multi Cell Testing Hardware", "R&D Stack Testing")
            .description("Specialized testing hardware that allows researchers to evaluate multiple electrolysis cells simultaneously. Supports a wide range of operating conditions including high pressure and variable temperatures.")
            .image("https://leancatwe.com/wp-content/uploads/2024/07/les_slozeny_new-e1722330282797.png")
            .partner("Leancat Electrolyzers", LEANCAT_WE_LOGO)
            .link("https://leancatwe.com/laboratory-electrolyzer-stack/")
            .feature(Settings, "Versatile", "Compatible with PEM/AEM")
            .feature(Gauge, "High Pressure", "Tests up to 50 bar")
            .feature(Cpu, "Data Acquisition", "High frequency logging")
            .specs(["Active Area: 5-50 cm2", "Current: Up to 1000A", "Temp: Up to 120°C"])
            .build(),
    ]
}

fn electrolyzer_test_stations() -> Vec<ProductRecord> {
    vec![
        product("Fuel Cell Stations", "Comprehensive Stack Analysis")
            .description("Fully automated test stations for the characterization of PEM and SOFC fuel cells. Includes regenerative electronic loads and precise humidity control for accurate performance curves.")
            .image("https://lean-cat.com/wp-content/uploads/2022/03/P1180271_transparent1-2-1229x1536.png")
            .partner("LEANCAT", LEANCAT_LOGO)
            .link("https://lean-cat.com/fuel-cell-test-station-pts-500/")
            .variant(
                "pts-1",
                "PTS-1",
                "The PTS-1 is a precision test station designed for low-power fuel cell research, ideal for single cell testing up to 1kW. It features high-resolution load banks and precise gas mixing capabilities for fundamental characterization.",
                "https://www.msesupplies.com/cdn/shop/files/Pic7_1024x1024.png?v=1722893070",
                "https://lean-cat.com/fuel-cell-test-station-pts-1/",
            )
            .variant(
                "pts-10",
                "PTS-10",
                "Designed for short-stack evaluation, the PTS-10 handles power ranges up to 10kW. This station integrates advanced thermal management and back-pressure control, making it suitable for automotive and stationary stack development.",
                "https://lean-cat.com/wp-content/uploads/2024/06/7.png",
                "https://lean-cat.com/fuel-cell-test-station-pts-10/",
            )
            .variant(
                "pts-100",
                "PTS-100",
                "A high-power test station built for full-size automotive stacks up to 100kW. The PTS-100 offers regenerative load capabilities to feed energy back to the grid, ensuring energy-efficient testing operations.",
                "https://lean-cat.com/wp-content/uploads/2022/03/P1180271_transparent1-2-1229x1536.png",
                "https://lean-cat.com/fuel-cell-test-station-pts-100/",
            )
            .variant(
                "pts-500",
                "PTS-500",
                "An industrial-grade testing solution for heavy-duty applications up to 500kW. The PTS-500 is engineered for endurance testing of large-scale fuel cell systems used in maritime, rail, and heavy trucking sectors.",
                "https://lean-cat.com/wp-content/uploads/2024/06/9.png",
                "https://lean-cat.com/fuel-cell-test-station-pts-500/",
            )
            .feature(Zap, "Load Banking", "Regenerative electronic loads")
            .feature(Thermometer, "Humidity Control", "Precise dew point control")
            .feature(Cpu, "Automation", "Script-based test protocols")
            .specs(["Power: 100W - 100kW", "Flow: Mass flow controllers", "EIS Capable"])
            .build(),
        product("Water Electrolyzer Test Station", "Electrolysis Performance Testing")
            .description("Dedicated stations designed to assess the efficiency and durability of water electrolysis stacks. Features automated back-pressure control and in-line safety gas analysis.")
            .image("https://lean-cat.com/wp-content/uploads/2024/06/3.png")
            .partner("LEANCAT", LEANCAT_LOGO)
            .link("https://lean-cat.com/water-electrolyzer-test-station-ets-1/")
            .feature(Gauge, "Pressure Control", "Automated back pressure")
            .feature(Shield, "Gas Analysis", "In-line H2 in O2 detection")
            .feature(Settings, "Fluid Conditioning", "DI water recirculation")
            .specs(["Voltage: 0-100V", "Current: 0-2000A", "Safety: SIL-2 Rated"])
            .build(),
    ]
}

fn battery_fuel_cell_test_systems() -> Vec<ProductRecord> {
    vec![
        product("High Power Multichannel EIS", "Impedance Spectroscopy")
            .description("A high-throughput system capable of performing Electrochemical Impedance Spectroscopy (EIS) on multiple channels simultaneously. Essential for grading batteries and analyzing stack homogeneity.")
            .image("https://www.kolibrik.net/storage/app/media/news/evm128-forntrear.jpg")
            .partner("Kolibrik", KOLIBRIK_LOGO)
            .link("https://www.kolibrik.net/en/solutions/megaeis-system-for-batteries")
            .feature(Zap, "Multi-channel", "Up to 32 parallel channels")
            .feature(Cpu, "High Frequency", "Up to 1 MHz range")
            .feature(Gauge, "Accuracy", "High precision ADC")
            .specs(["Channels: 8/16/32", "Frequency: 10µHz - 1MHz", "Current: 5A/channel"])
            .build(),
        product("Cell Voltage Monitoring", "Stack Health Monitoring")
            .description("A compact and modular CVM solution designed to monitor the individual cell voltages of fuel cell and battery stacks. Critical for preventing cell reversal and ensuring long-term stack health.")
            .image("https://www.kolibrik.net/storage/app/media/product-images/cell-voltage-monitoring/CVM-S320H.jpg")
            .partner("Kolibrik", KOLIBRIK_LOGO)
            .link("https://www.kolibrik.net/en/products/cell-voltage-monitoring/cvm-64h")
            .feature(Zap, "High Voltage", "Isolation up to 1000V")
            .feature(Cpu, "Fast Sampling", "1kHz per channel")
            .feature(Settings, "Compact", "Direct stack mounting")
            .specs(["Channels: Up to 500", "Range: ±5V per cell", "Comms: CAN Bus"])
            .build(),
    ]
}
