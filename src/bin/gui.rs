#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::{env, fs};
use universal_unit_converter::{
    catalog, config, conversion,
    history::{ConversionRecord, HistoryStore},
    i18n,
    quantity::QuantityKind,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_transparent(true)
        .with_inner_size(egui::vec2(780.0, 640.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let config_path = PathBuf::from(config::DEFAULT_CONFIG_PATH);
    let mut app_cfg = config::load_or_default(&config_path).unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Universal Unit Converter",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), config_path.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 안의 첫 번째 ttf/ttc
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    if let Ok(entries) = fs::read_dir("assets/fonts") {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("ttc"))
                .unwrap_or(false);
            if is_font {
                let bytes =
                    fs::read(&path).map_err(|e| format!("Failed to read font file: {e}"))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    store: HistoryStore,
    lang_input: String,
    lang_save_status: Option<String>,
    // 변환 폼
    category: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    history_warning: Option<String>,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    window_alpha: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf) -> Self {
        let category =
            catalog::find_category(&config.default_category).unwrap_or(QuantityKind::Length);
        let (conv_from, conv_to) = catalog::default_units_for(category);
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let store = HistoryStore::load(config.history_file.as_str());
        let lang_input = config.language.clone();
        let window_alpha = config.window_alpha.clamp(0.3, 1.0);
        Self {
            config,
            config_path,
            tr,
            store,
            lang_input,
            lang_save_status: None,
            category,
            conv_value: 1.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_result: None,
            history_warning: None,
            ui_scale: 1.0,
            always_on_top: false,
            window_alpha,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 카테고리 전환 시 단위 선택과 직전 결과를 초기화한다.
    fn set_category(&mut self, kind: QuantityKind) {
        if self.category == kind {
            return;
        }
        self.category = kind;
        let (from, to) = catalog::default_units_for(kind);
        self.conv_from = from.to_string();
        self.conv_to = to.to_string();
        self.conv_result = None;
        self.history_warning = None;
    }

    /// 좌측 카테고리 선택 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Category"));
            ui.add_space(8.0);
        });
        let mut clicked = None;
        for kind in catalog::CATEGORIES {
            let label = category_label(&txt, kind);
            let selected = self.category == kind;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch category"));
            if resp.clicked() {
                clicked = Some(kind);
            }
            ui.add_space(4.0);
        }
        if let Some(kind) = clicked {
            self.set_category(kind);
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.convert.heading", "Unit Converter"),
            &txt(
                "gui.convert.tip",
                "Convert a value between two units of the selected category.",
            ),
        );
        label_with_tip(
            ui,
            &category_label(&txt, self.category),
            &txt("gui.convert.category_tip", "Selected category"),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.convert.value", "Value"),
                            &txt("gui.convert.value_tip", "Enter the value to convert"),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.conv_value)
                                .speed(1.0)
                                .clamp_range(0.0..=f64::MAX)
                                .max_decimals(2),
                        );
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.convert.from", "From unit"),
                            &txt("gui.convert.from_tip", "Current unit of the value"),
                        );
                        unit_combo(ui, "conv_from", &mut self.conv_from, catalog::units_for(self.category));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.convert.to", "To unit"),
                            &txt("gui.convert.to_tip", "Desired unit after conversion"),
                        );
                        unit_combo(ui, "conv_to", &mut self.conv_to, catalog::units_for(self.category));
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.convert.run", "Convert")).clicked() {
                    self.history_warning = None;
                    match conversion::convert_auto(
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                    ) {
                        Ok(v) => {
                            self.conv_result = Some(format!(
                                "{:.2} {} = {v:.2} {}",
                                self.conv_value,
                                self.conv_from.trim(),
                                self.conv_to.trim()
                            ));
                            let record = ConversionRecord::new(
                                self.conv_value,
                                self.conv_from.trim(),
                                self.conv_to.trim(),
                                v,
                            );
                            let name = catalog::category_name(self.category);
                            if let Err(e) = self.store.append(name, record) {
                                self.history_warning = Some(format!(
                                    "{} ({e})",
                                    txt(
                                        "gui.convert.history_warn",
                                        "Warning: conversion history was not saved"
                                    )
                                ));
                            }
                        }
                        Err(e) => {
                            self.conv_result = Some(format!(
                                "{}: {e}",
                                txt("gui.convert.error_prefix", "Error")
                            ));
                        }
                    }
                }
                if let Some(res) = &self.conv_result {
                    ui.label(res);
                }
                if let Some(warn) = &self.history_warning {
                    ui.colored_label(ui.visuals().warn_fg_color, warn);
                }
            });
        });
    }

    fn ui_history(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.history.heading", "Conversion History"),
            &txt(
                "gui.history.tip",
                "Conversions logged for the selected category, oldest first.",
            ),
        );
        ui.add_space(8.0);
        let name = catalog::category_name(self.category);
        if self.store.record_count(name) == 0 {
            ui.label(txt("gui.history.empty", "No conversion history available."));
            return;
        }
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("history_grid")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong(txt("gui.history.no", "#"));
                    ui.strong(txt("gui.history.value", "Value"));
                    ui.strong(txt("gui.history.from", "From"));
                    ui.strong(txt("gui.history.to", "To"));
                    ui.strong(txt("gui.history.result", "Result"));
                    ui.end_row();
                    for (i, record) in self.store.view(name).iter().enumerate() {
                        ui.label((i + 1).to_string());
                        ui.label(format!("{:.2}", record.value));
                        ui.label(&record.from_unit);
                        ui.label(&record.to_unit);
                        ui.label(&record.result);
                        ui.end_row();
                    }
                });
        });
        ui.add_space(8.0);
        if ui
            .button(txt("gui.history.clear", "Clear History"))
            .on_hover_text(txt(
                "gui.history.clear_tip",
                "Remove every record of the selected category.",
            ))
            .clicked()
        {
            if let Err(e) = self.store.clear(name) {
                self.history_warning = Some(format!(
                    "{} ({e})",
                    txt(
                        "gui.convert.history_warn",
                        "Warning: conversion history was not saved"
                    )
                ));
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일. 매 프레임 기본 색상에서 다시 계산한다.
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        let base = if style.visuals.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.visuals.window_fill = base.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = base.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Universal Unit Converter"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_browse", "Browse")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_load", "Load")).clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(ui.visuals().error_fg_color, err);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            "auto",
                            Some(self.config.language.as_str()),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save(&self.config_path) {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline unit converter with per-category history",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.usage",
                        "Pick a category on the left, choose units, enter a value and press Convert.",
                    ));
                    ui.label(txt(
                        "gui.about.history",
                        "Each successful conversion is appended to the category history and saved to disk immediately.",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust language/font in settings if you see issues.",
                    ));
                });
        }

        // 좌측 카테고리 메뉴 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_converter(ui);
                    ui.add_space(16.0);
                    self.ui_history(ui);
                });
        });
    }
}

fn category_label<F>(txt: &F, kind: QuantityKind) -> String
where
    F: Fn(&str, &str) -> String,
{
    match kind {
        QuantityKind::Length => txt("gui.category.length", "Length"),
        QuantityKind::Weight => txt("gui.category.weight", "Weight"),
        QuantityKind::Volume => txt("gui.category.volume", "Volume"),
        QuantityKind::Temperature => txt("gui.category.temperature", "Temperature"),
        QuantityKind::Speed => txt("gui.category.speed", "Speed"),
        QuantityKind::Time => txt("gui.category.time", "Time"),
    }
}

fn unit_label(code: &str) -> String {
    let label = match code.trim().to_lowercase().as_str() {
        "millimeter" => "millimeter (mm)",
        "centimeter" => "centimeter (cm)",
        "meter" => "meter (m)",
        "kilometer" => "kilometer (km)",
        "inch" => "inch (in)",
        "foot" => "foot (ft)",
        "yard" => "yard (yd)",
        "mile" => "mile (mi)",
        "kilogram" => "kilogram (kg)",
        "gram" => "gram (g)",
        "milligram" => "milligram (mg)",
        "pound" => "pound (lb)",
        "ounce" => "ounce (oz)",
        "liter" => "liter (L)",
        "milliliter" => "milliliter (mL)",
        "gallon" => "gallon (gal)",
        "quart" => "quart (qt)",
        "pint" => "pint (pt)",
        "celsius" => "Celsius (°C)",
        "fahrenheit" => "Fahrenheit (°F)",
        "kelvin" => "Kelvin (K)",
        "meter/second" => "meter/second (m/s)",
        "kilometer/hour" => "kilometer/hour (km/h)",
        "mile/hour" => "mile/hour (mph)",
        "foot/second" => "foot/second (ft/s)",
        "second" => "second (s)",
        "minute" => "minute (min)",
        "hour" => "hour (h)",
        "day" => "day (d)",
        _ => return code.to_string(),
    };
    label.to_string()
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(unit_label(value))
        .show_ui(ui, |ui| {
            for code in options {
                ui.selectable_value(value, code.to_string(), unit_label(code));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_config_default_category() {
        let cfg = config::Config {
            default_category: "Temperature".into(),
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg, PathBuf::from("config.toml"));
        assert_eq!(app.category, QuantityKind::Temperature);
        assert_eq!(app.conv_from, "celsius");
        assert_eq!(app.conv_to, "fahrenheit");
    }

    #[test]
    fn unknown_default_category_falls_back_to_length() {
        let cfg = config::Config {
            default_category: "Currency".into(),
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg, PathBuf::from("config.toml"));
        assert_eq!(app.category, QuantityKind::Length);
        assert_eq!(app.conv_from, "meter");
        assert_eq!(app.conv_to, "foot");
    }

    #[test]
    fn switching_category_resets_units_and_result() {
        let mut app = GuiApp::new(config::Config::default(), PathBuf::from("config.toml"));
        app.conv_result = Some("1.00 meter = 3.28 foot".into());
        app.set_category(QuantityKind::Speed);
        assert_eq!(app.conv_from, "kilometer/hour");
        assert_eq!(app.conv_to, "mile/hour");
        assert!(app.conv_result.is_none());
    }

    #[test]
    fn every_catalog_unit_has_a_display_label() {
        for kind in catalog::CATEGORIES {
            for code in catalog::units_for(kind) {
                let label = unit_label(code);
                assert!(
                    label.contains('('),
                    "missing pretty label for {code}: {label}"
                );
            }
        }
    }
}
