//! Closed S-125 enumerations and their translation from seamark tag values.
//!
//! Every `parse` is total: a recognized token yields exactly one value,
//! anything else (including the empty string) yields `None`.

use crate::constants::LIST_SEPARATOR;

/// Declares a closed enumeration with its accepted seamark tokens.
///
/// The first token of each variant is its printable name; extra tokens after
/// `|` are accepted aliases.
macro_rules! seamark_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Translate a seamark token, `None` for anything unrecognized
            pub fn parse(value: &str) -> Option<Self> {
                match value.trim() {
                    $( $token $(| $alias)* => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// The canonical seamark token for this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Apply a translation to every `;`-separated element, dropping elements
/// that do not translate. An empty input yields an empty list.
pub fn split_and_parse<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse)
        .collect()
}

seamark_enum! {
    Colour {
        White => "white",
        Black => "black",
        Red => "red",
        Green => "green",
        Blue => "blue",
        Yellow => "yellow",
        Grey => "grey" | "gray",
        Brown => "brown",
        Amber => "amber",
        Violet => "violet",
        Orange => "orange",
        Magenta => "magenta",
        Pink => "pink",
    }
}

seamark_enum! {
    ColourPattern {
        HorizontalStripes => "horizontal",
        VerticalStripes => "vertical",
        DiagonalStripes => "diagonal",
        Squared => "squared",
        StripesDirectionUnknown => "stripes",
        BorderStripe => "border",
        SingleColour => "single",
    }
}

seamark_enum! {
    BeaconShape {
        StakePolePerchPost => "stake" | "pole" | "perch" | "post",
        Withy => "withy",
        BeaconTower => "tower",
        LatticeBeacon => "lattice",
        PileBeacon => "pile",
        Cairn => "cairn",
        Buoyant => "buoyant",
    }
}

seamark_enum! {
    BuoyShape {
        Conical => "conical" | "nun",
        Can => "can" | "cylindrical",
        Spherical => "spherical",
        Pillar => "pillar",
        Spar => "spar",
        Barrel => "barrel",
        SuperBuoy => "super-buoy",
        IceBuoy => "ice_buoy",
    }
}

seamark_enum! {
    CategoryOfCardinalMark {
        NorthCardinalMark => "north",
        EastCardinalMark => "east",
        SouthCardinalMark => "south",
        WestCardinalMark => "west",
    }
}

seamark_enum! {
    CategoryOfLateralMark {
        PortHandLateralMark => "port",
        StarboardHandLateralMark => "starboard",
        PreferredChannelToStarboard => "preferred_channel_starboard",
        PreferredChannelToPort => "preferred_channel_port",
    }
}

seamark_enum! {
    CategoryOfSpecialPurposeMark {
        FiringDangerMark => "firing_danger_area",
        TargetMark => "target",
        MarkerShipMark => "marker_ship",
        DegaussingRangeMark => "degaussing_range",
        BargeMark => "barge",
        CableMark => "cable",
        SpoilGroundMark => "spoil_ground",
        OutfallMark => "outfall",
        Odas => "odas",
        RecordingMark => "recording",
        SeaplaneAnchorageMark => "seaplane_anchorage",
        RecreationZoneMark => "recreation_zone",
        PrivateMark => "private",
        MooringMark => "mooring",
        Lanby => "lanby",
        LeadingMark => "leading",
        MeasuredDistanceMark => "measured_distance",
        NoticeMark => "notice",
        TssMark => "tss",
        AnchoringProhibitedMark => "no_anchoring",
        BerthingProhibitedMark => "no_berthing",
        OvertakingProhibitedMark => "no_overtaking",
        SpeedLimitMark => "speed_limit",
        WarningMark => "warning",
        PipelineMark => "pipeline",
        AnchorageMark => "anchorage",
        DivingMark => "diving",
        FoulGroundMark => "foul_ground",
        YachtingMark => "yachting",
        EntryProhibitedMark => "entry_prohibited",
        WorkInProgressMark => "work_in_progress",
        MarkWithUnknownPurpose => "unknown_purpose",
        WellheadMark => "wellhead",
        ChannelSeparationMark => "channel_separation",
        MarineFarmMark => "marine_farm",
        ArtificialReefMark => "artificial_reef",
    }
}

seamark_enum! {
    CategoryOfLight {
        DirectionalFunction => "directional",
        LeadingLight => "leading",
        AeroLight => "aero",
        AirObstructionLight => "air_obstruction",
        FogDetectorLight => "fog_detector",
        FloodLight => "floodlight",
        StripLight => "strip_light",
        SubsidiaryLight => "subsidiary",
        Spotlight => "spotlight",
        Front => "front",
        Rear => "rear",
        Lower => "lower",
        Upper => "upper",
        MoireEffect => "moire",
        Emergency => "emergency",
        BearingLight => "bearing",
        HorizontallyDisposed => "horizontal",
        VerticallyDisposed => "vertical",
    }
}

seamark_enum! {
    LightCharacteristic {
        Fixed => "F",
        Flashing => "Fl",
        LongFlashing => "LFl",
        QuickFlashing => "Q",
        VeryQuickFlashing => "VQ",
        UltraQuickFlashing => "UQ",
        Isophased => "Iso",
        Occulting => "Oc",
        InterruptedQuickFlashing => "IQ",
        InterruptedVeryQuickFlashing => "IVQ",
        InterruptedUltraQuickFlashing => "IUQ",
        MorseCode => "Mo",
        FixedAndFlashing => "FFl",
        FlashAndLongFlash => "FlLFl",
        OccultingAndFlashing => "OcFl",
        FixedAndLongFlashing => "FLFl",
        OccultingAlternating => "Al.Oc",
        LongFlashAlternating => "Al.LFl",
        FlashAlternating => "Al.Fl",
        GroupAlternating => "Al.Gr",
        FixedAlternating => "Al",
        QuickFlashPlusLongFlash => "Q+LFl",
        VeryQuickFlashPlusLongFlash => "VQ+LFl",
        UltraQuickFlashPlusLongFlash => "UQ+LFl",
        FixedAndAlternatingFlashing => "Al.FFl",
    }
}

seamark_enum! {
    NatureOfConstruction {
        Masonry => "masonry",
        Concreted => "concreted",
        LooseBoulders => "loose_boulders",
        HardSurfaced => "hard_surfaced",
        Unsurfaced => "unsurfaced",
        Wooden => "wooden",
        Metal => "metal",
        GlassReinforcedPlastic => "grp" | "glass_reinforced_plastic",
        Painted => "painted",
        Framework => "framework",
    }
}

seamark_enum! {
    Status {
        Permanent => "permanent",
        Occasional => "occasional",
        Recommended => "recommended",
        NotInUse => "not_in_use",
        PeriodicIntermittent => "intermittent",
        Reserved => "reserved",
        Temporary => "temporary",
        Private => "private",
        Mandatory => "mandatory",
        Extinguished => "extinguished",
        Illuminated => "illuminated",
        Historic => "historic",
        Public => "public",
        Synchronized => "synchronized",
        Watched => "watched",
        UnWatched => "unwatched",
        ExistenceDoubtful => "existence_doubtful",
        Buoyed => "buoyed",
    }
}

seamark_enum! {
    RadarConspicuous {
        RadarConspicuous => "conspicuous",
        NotRadarConspicuous => "not_conspicuous",
    }
}

seamark_enum! {
    VisuallyConspicuous {
        VisuallyConspicuous => "conspicuous",
        NotVisuallyConspicuous => "not_conspicuous",
    }
}

seamark_enum! {
    MarksNavigationalSystemOf {
        IalaA => "iala-a",
        IalaB => "iala-b",
        NoSystem => "none",
        OtherSystem => "other",
        Cevni => "cevni",
    }
}

seamark_enum! {
    Function {
        HarbourMasterOffice => "harbour_master",
        CustomsOffice => "custom",
        HealthOffice => "health",
        Hospital => "hospital",
        PostOffice => "post_office",
        Hotel => "hotel",
        RailwayStation => "railway_station",
        PoliceStation => "police_station",
        WaterPoliceStation => "water-police",
        PilotOffice => "pilot_office",
        PilotLookout => "pilot_lookout",
        Bank => "bank",
        Church => "church",
        Chapel => "chapel",
        Temple => "temple",
        Mosque => "mosque",
        Lookout => "lookout",
        Communication => "communication",
        Television => "television",
        Radio => "radio",
        Radar => "radar",
        LightSupport => "light_support",
        Microwave => "microwave",
        Cooling => "cooling",
        Observation => "observation",
        Timeball => "timeball",
        Clock => "clock",
        Control => "control",
    }
}

seamark_enum! {
    CategoryOfFogSignal {
        Explosive => "explosive",
        Diaphone => "diaphone",
        Siren => "siren",
        Nautophone => "nautophone",
        Reed => "reed",
        Tyfon => "tyfon",
        Bell => "bell",
        Whistle => "whistle",
        Gong => "gong",
        Horn => "horn",
    }
}

seamark_enum! {
    CategoryOfRadioStation {
        CircularNonDirectionalMarineOrAeroMarineRadiobeacon => "circular",
        DirectionalRadiobeacon => "directional",
        RotatingPatternRadiobeacon => "rotating_pattern",
        ConsolBeacon => "consol",
        RadioDirectionFindingStation => "rdf",
        CoastRadioStationProvidingQtgService => "qtg",
        AeronauticalRadiobeacon => "aeronautical",
        Decca => "decca",
        LoranC => "loran",
        DifferentialGnss => "dgps",
        Toran => "toran",
        Omega => "omega",
        Syledis => "syledis",
        Chaika => "chiaka" | "chaika",
        PublicCommunication => "public_communication",
        CommercialBroadcastStationLw => "commercial_broadcast_lw",
        CommercialBroadcastStationMw => "commercial_broadcast_mw",
        CommercialBroadcastStationFm => "commercial_broadcast_fm",
        Facsimile => "facsimile",
        TimeSignalStation => "time_signal",
        AutomaticIdentificationSystem => "ais",
    }
}

seamark_enum! {
    BuildingShape {
        HighRiseBuilding => "high-rise",
        Pyramid => "pyramid",
        Cylindrical => "cylindrical",
        Spherical => "spherical",
        Cubic => "cubic",
    }
}

seamark_enum! {
    CategoryOfSiloTank {
        Silo => "silo",
        Tank => "tank",
        GrainElevator => "grain_elevator",
        WaterTower => "water_tower",
    }
}

seamark_enum! {
    VirtualAisAidToNavigationType {
        NorthCardinal => "north_cardinal",
        EastCardinal => "east_cardinal",
        SouthCardinal => "south_cardinal",
        WestCardinal => "west_cardinal",
        PortLateral => "port_lateral",
        StarboardLateral => "starboard_lateral",
        PreferredChannelToPort => "preferred_channel_port",
        PreferredChannelToStarboard => "preferred_channel_starboard",
        IsolatedDanger => "isolated_danger",
        SafeWater => "safe_water",
        SpecialPurpose => "special_purpose",
        EmergencyWreckMarking => "emergency_wreck" | "new_danger",
    }
}

seamark_enum! {
    CategoryOfLandmark {
        Cairn => "cairn",
        Cemetery => "cemetery",
        Chimney => "chimney",
        DishAerial => "dish_aerial",
        Flagstaff => "flagstaff",
        FlareStack => "flare_stack",
        Mast => "mast",
        Windsock => "windsock",
        Monument => "monument",
        Column => "column",
        MemorialPlaque => "memorial_plaque",
        Obelisk => "obelisk",
        Statue => "statue",
        Cross => "cross",
        Dome => "dome",
        RadarScanner => "radar_scanner",
        Tower => "tower",
        Windmill => "windmill",
        Windmotor => "windmotor",
        SpireMinaret => "spire" | "minaret",
        Boulder => "boulder",
    }
}

seamark_enum! {
    TopmarkDaymarkShape {
        ConePointUp => "cone, point up",
        ConePointDown => "cone, point down",
        Sphere => "sphere",
        TwoSpheres => "2 spheres",
        Cylinder => "cylinder",
        Board => "board",
        XShape => "x-shape",
        UprightCross => "cross",
        CubePointUp => "cube, point up",
        TwoConesPointToPoint => "2 cones point together",
        TwoConesBaseToBase => "2 cones base together",
        Rhombus => "rhombus",
        TwoConesPointsUpward => "2 cones up",
        TwoConesPointsDownward => "2 cones down",
        BesomPointUp => "besom, point up",
        BesomPointDown => "besom, point down",
        Flag => "flag",
        SphereOverARhombus => "sphere over rhombus",
        Square => "square",
        RectangleHorizontal => "rectangle, horizontal",
        RectangleVertical => "rectangle, vertical",
        TrapeziumUp => "trapezium, up",
        TrapeziumDown => "trapezium, down",
        TrianglePointUp => "triangle, point up",
        TrianglePointDown => "triangle, point down",
        Circle => "circle",
        TwoUprightCrosses => "2 crosses",
        TShape => "t-shape",
        TrianglePointUpOverACircle => "triangle, point up over circle",
        UprightCrossOverACircle => "cross over circle",
        RhombusOverACircle => "rhombus over circle",
        CircleOverATrianglePointUp => "circle over triangle, point up",
        Other => "other",
    }
}

seamark_enum! {
    CategoryOfInstallationBuoy {
        CatenaryAnchorLegMooring => "calm",
        SingleBuoyMooring => "sbm",
    }
}

seamark_enum! {
    CategoryOfRadarTransponderBeacon {
        Ramark => "ramark",
        Racon => "racon",
        LeadingRacon => "leading",
    }
}

seamark_enum! {
    ExhibitionConditionOfLight {
        LightShownWithoutChangeOfCharacter => "24h",
        DaytimeLight => "day",
        FogLight => "fog",
        NightLight => "night",
    }
}

seamark_enum! {
    CategoryOfAggregation {
        LeadingLine => "leading_line",
        RangeSystem => "range_system",
        MeasuredDistance => "measured_distance",
        BuoyMooring => "buoy_mooring",
    }
}

seamark_enum! {
    CategoryOfAssociation {
        ChannelMarkings => "channel_markings",
        DangerMarkings => "danger_markings",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_tokens_translate() {
        assert_eq!(Colour::parse("red"), Some(Colour::Red));
        assert_eq!(ColourPattern::parse("horizontal"), Some(ColourPattern::HorizontalStripes));
        assert_eq!(BeaconShape::parse("stake"), Some(BeaconShape::StakePolePerchPost));
        assert_eq!(BeaconShape::parse("perch"), Some(BeaconShape::StakePolePerchPost));
        assert_eq!(
            CategoryOfCardinalMark::parse("north"),
            Some(CategoryOfCardinalMark::NorthCardinalMark)
        );
        assert_eq!(MarksNavigationalSystemOf::parse("iala-a"), Some(MarksNavigationalSystemOf::IalaA));
        assert_eq!(LightCharacteristic::parse("Al.Fl"), Some(LightCharacteristic::FlashAlternating));
        assert_eq!(
            TopmarkDaymarkShape::parse("cone, point up"),
            Some(TopmarkDaymarkShape::ConePointUp)
        );
    }

    #[test]
    fn test_unrecognized_and_empty_are_absent() {
        assert_eq!(Colour::parse(""), None);
        assert_eq!(Colour::parse("   "), None);
        assert_eq!(Colour::parse("mauve"), None);
        assert_eq!(Status::parse("Permanent-ish"), None);
        assert_eq!(LightCharacteristic::parse("fl"), None);
        assert_eq!(CategoryOfAssociation::parse("leading_line"), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Status::parse(" permanent "), Some(Status::Permanent));
    }

    #[test]
    fn test_printable_name_round_trip() {
        macro_rules! assert_round_trip {
            ($($vocabulary:ty),+ $(,)?) => {
                $(
                    for value in <$vocabulary>::ALL {
                        assert_eq!(<$vocabulary>::parse(value.as_str()), Some(*value));
                        assert_eq!(value.to_string(), value.as_str());
                    }
                )+
            };
        }

        assert_round_trip!(
            Colour,
            ColourPattern,
            BeaconShape,
            BuoyShape,
            CategoryOfCardinalMark,
            CategoryOfLateralMark,
            CategoryOfSpecialPurposeMark,
            CategoryOfLight,
            LightCharacteristic,
            NatureOfConstruction,
            Status,
            RadarConspicuous,
            VisuallyConspicuous,
            MarksNavigationalSystemOf,
            Function,
            CategoryOfFogSignal,
            CategoryOfRadioStation,
            BuildingShape,
            CategoryOfSiloTank,
            VirtualAisAidToNavigationType,
            CategoryOfLandmark,
            TopmarkDaymarkShape,
            CategoryOfInstallationBuoy,
            CategoryOfRadarTransponderBeacon,
            ExhibitionConditionOfLight,
            CategoryOfAggregation,
            CategoryOfAssociation,
        );
    }

    #[test]
    fn test_alias_round_trips_to_same_category() {
        let parsed = BeaconShape::parse("post").unwrap();
        assert_eq!(BeaconShape::parse(parsed.as_str()), Some(parsed));
    }

    #[test]
    fn test_split_and_parse_keeps_order() {
        let colours = split_and_parse("red;white;red", Colour::parse);
        assert_eq!(colours, vec![Colour::Red, Colour::White, Colour::Red]);
    }

    #[test]
    fn test_split_and_parse_drops_unparseable() {
        let colours = split_and_parse("red; mauve ;green;", Colour::parse);
        assert_eq!(colours, vec![Colour::Red, Colour::Green]);
        assert!(split_and_parse("", Colour::parse).is_empty());
    }
}
