use super::Entry;

/// Skeleton of the audio editor web UI (Next.js app router layout).
pub const AUDIO_UI: &[Entry] = &[
    Entry::new("public/fonts", &[]),
    Entry::new("public/icons", &[]),
    Entry::new("public/presets", &[]),
    Entry::new("app/api/export", &["route.ts"]),
    Entry::new("app/api/presets", &["route.ts"]),
    Entry::new(
        "components/ui",
        &[
            "Button.tsx",
            "Slider.tsx",
            "Knob.tsx",
            "Switch.tsx",
            "Card.tsx",
            "Modal.tsx",
            "Tabs.tsx",
            "Dropdown.tsx",
            "Tooltip.tsx",
        ],
    ),
    Entry::new("components/layout", &["Header.tsx", "Footer.tsx", "Sidebar.tsx"]),
    Entry::new(
        "components/audio",
        &[
            "SoundGrid.tsx",
            "SoundCard.tsx",
            "Timeline.tsx",
            "Track.tsx",
            "TrackControls.tsx",
            "TimelineControls.tsx",
            "Waveform.tsx",
            "Spectrum.tsx",
        ],
    ),
    Entry::new(
        "components/modals",
        &["SoundEditor.tsx", "ExportModal.tsx", "PresetModal.tsx"],
    ),
    Entry::new(
        "components/controls",
        &[
            "VolumeControl.tsx",
            "PanControl.tsx",
            "PitchControl.tsx",
            "FilterControls.tsx",
            "EnvelopeControls.tsx",
            "LFOControls.tsx",
            "EffectsControls.tsx",
            "EQControls.tsx",
            "DynamicsControls.tsx",
            "SpatialControls.tsx",
        ],
    ),
    Entry::new(
        "lib/audio",
        &[
            "audioContext.ts",
            "generators.ts",
            "processors.ts",
            "effects.ts",
            "exporters.ts",
        ],
    ),
    Entry::new(
        "lib/hooks",
        &[
            "useAudioNode.ts",
            "useTimeline.ts",
            "usePresets.ts",
            "useDragResize.ts",
        ],
    ),
    Entry::new("lib/utils", &["animations.ts", "storage.ts", "format.ts"]),
    Entry::new("types", &["audio.ts", "preset.ts", "ui.ts"]),
    Entry::new("store", &["index.ts"]),
    Entry::new(
        "store/slices",
        &["timelineSlice.ts", "soundsSlice.ts", "uiSlice.ts"],
    ),
];
