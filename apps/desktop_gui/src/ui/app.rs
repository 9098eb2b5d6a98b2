use chrono::{Local, Timelike};
use directory_core::{derive, filter, ContactStore, NavEvent, ViewRouter, ViewState};
use eframe::egui;
use egui::RichText;
use shared::domain::{Network, NetworkId, Person, PersonId, Relation};

use crate::ui::theme;

const SIDEBAR_WIDTH: f32 = 270.0;
const MENU_ROW_HEIGHT: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Details,
    Tree,
}

/// People-list scope selector. Selecting an entry only changes the header
/// label, matching the prototype mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeopleScope {
    All,
    Recent,
    Favorites,
    ByOrganization,
}

impl PeopleScope {
    const ALL: [PeopleScope; 4] = [
        PeopleScope::All,
        PeopleScope::Recent,
        PeopleScope::Favorites,
        PeopleScope::ByOrganization,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::All => "All People",
            Self::Recent => "Recent",
            Self::Favorites => "Favorites",
            Self::ByOrganization => "By Organization",
        }
    }
}

pub struct DirectoryApp {
    store: ContactStore,
    // Derived once; the contact list never changes after startup.
    networks: Vec<Network>,
    router: ViewRouter,
    menu_open: bool,
    people_search: String,
    scope: PeopleScope,
    detail_tab: DetailTab,
    ui_scale: f32,
    theme_applied: bool,
}

impl DirectoryApp {
    pub fn new(store: ContactStore, ui_scale: f32) -> Self {
        let networks = derive::networks(store.people());
        Self {
            store,
            networks,
            router: ViewRouter::new(),
            menu_open: false,
            people_search: String::new(),
            scope: PeopleScope::All,
            detail_tab: DetailTab::Details,
            ui_scale,
            theme_applied: false,
        }
    }

    fn handle_nav(&mut self, event: NavEvent) {
        // Each person detail opens on the Details tab, as if freshly mounted.
        if matches!(event, NavEvent::OpenPerson(_)) {
            self.detail_tab = DetailTab::Details;
        }
        self.router.apply(event);
    }

    fn view_header(&mut self, ui: &mut egui::Ui, title: &str) {
        egui::Frame::NONE
            .fill(theme::SURFACE)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("☰").size(16.0)).frame(false))
                        .clicked()
                    {
                        self.menu_open = true;
                    }
                    ui.label(RichText::new(title).strong());
                });
            });
        ui.separator();
    }

    // --- Home ------------------------------------------------------------

    fn show_home(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>) {
        egui::Frame::NONE
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.columns(3, |columns| {
                    if columns[0]
                        .add(egui::Button::new(RichText::new("☰").size(16.0)).frame(false))
                        .clicked()
                    {
                        self.menu_open = true;
                    }
                    columns[1].vertical_centered(|ui| {
                        ui.label(RichText::new("MomFog").strong().size(13.0));
                    });
                });
            });

        egui::TopBottomPanel::bottom("home_prompt")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG)
                    .inner_margin(egui::Margin::symmetric(12, 12)),
            )
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                self.show_prompt_row(ui, events);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG))
            .show_inside(ui, |ui| {
                ui.add_space(ui.available_height() * 0.22);
                ui.vertical_centered(|ui| {
                    draw_logo_mark(ui, 72.0);
                    ui.add_space(24.0);
                    let greeting = format!(
                        "How can I help you this {}?",
                        greeting_for_hour(Local::now().hour())
                    );
                    ui.label(RichText::new(greeting).size(21.0).color(theme::TEXT));
                });
            });
    }

    fn show_prompt_row(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>) {
        egui::Frame::NONE
            .fill(theme::SURFACE)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .corner_radius(egui::CornerRadius::same(20))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    // Attach and tune affordances are decorative in the
                    // prototype; only the text field and submit act.
                    let _ = ui.add(decorative_icon_button("➕"));
                    let _ = ui.add(decorative_icon_button("🎛"));

                    let prompt_edit = ui.add(
                        egui::TextEdit::singleline(self.router.prompt_mut())
                            .hint_text("Chat with MomFog")
                            .frame(false)
                            .desired_width(ui.available_width() - 76.0),
                    );

                    let _ = ui.add(decorative_icon_button("🎤"));
                    let submit = ui.add(
                        egui::Button::new(RichText::new("⬆").color(theme::SURFACE))
                            .fill(theme::TEXT)
                            .corner_radius(egui::CornerRadius::same(14))
                            .min_size(egui::vec2(28.0, 28.0)),
                    );

                    let submitted_with_enter = prompt_edit.lost_focus()
                        && ui.input(|input| input.key_pressed(egui::Key::Enter));
                    if submit.clicked() || submitted_with_enter {
                        events.push(NavEvent::SubmitPrompt);
                    }
                });
            });
    }

    // --- People list ------------------------------------------------------

    fn show_people(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>) {
        egui::Frame::NONE
            .fill(theme::SURFACE)
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("☰").size(16.0)).frame(false))
                        .clicked()
                    {
                        self.menu_open = true;
                    }
                    egui::ComboBox::from_id_salt("people_scope")
                        .selected_text(RichText::new(self.scope.label()).strong())
                        .width(ui.available_width() - 8.0)
                        .show_ui(ui, |ui| {
                            for scope in PeopleScope::ALL {
                                ui.selectable_value(&mut self.scope, scope, scope.label());
                            }
                        });
                });
                ui.add_space(8.0);
                egui::Frame::NONE
                    .fill(theme::BG)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .corner_radius(egui::CornerRadius::same(16))
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("🔍").color(theme::SUBTEXT));
                            ui.add(
                                egui::TextEdit::singleline(&mut self.people_search)
                                    .hint_text("Search people...")
                                    .frame(false)
                                    .desired_width(ui.available_width() - 8.0),
                            );
                        });
                    });
            });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("people_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        for person in filter::search_people(self.store.people(), &self.people_search)
                        {
                            if person_card(ui, person).clicked() {
                                events.push(NavEvent::OpenPerson(person.id.clone()));
                            }
                            ui.add_space(8.0);
                        }
                    });
            });
    }

    // --- Person detail ----------------------------------------------------

    fn show_person(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>, id: &PersonId) {
        // Unknown ids (including dangling relation targets) render nothing,
        // matching the prototype's silent no-render behavior.
        let Some(person) = self.store.person(id) else {
            tracing::warn!(person_id = %id, "selected person not in store; rendering nothing");
            return;
        };

        egui::Frame::NONE
            .fill(theme::SURFACE)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("⬅").size(15.0)).frame(false))
                        .clicked()
                    {
                        events.push(NavEvent::Back);
                    }
                    avatar_disc(ui, 36.0, &person.name);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&person.name).strong());
                        ui.label(
                            RichText::new(&person.primary_role)
                                .size(11.0)
                                .color(theme::SUBTEXT),
                        );
                    });
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.detail_tab, DetailTab::Details, "Details");
                    ui.selectable_value(&mut self.detail_tab, DetailTab::Tree, "Knowledge Tree");
                });
            });
        ui.separator();

        match self.detail_tab {
            DetailTab::Details => show_person_details(ui, person),
            DetailTab::Tree => show_knowledge_tree(ui, events, person),
        }
    }

    // --- Networks ---------------------------------------------------------

    fn show_networks(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>) {
        self.view_header(ui, "Networks");

        egui::ScrollArea::vertical()
            .id_salt("networks_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        for network in &self.networks {
                            if network_card(ui, network).clicked() {
                                events.push(NavEvent::OpenNetwork(network.id.clone()));
                            }
                            ui.add_space(8.0);
                        }
                    });
            });
    }

    fn show_network(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>, id: &NetworkId) {
        let Some(network) = self.networks.iter().find(|network| &network.id == id) else {
            tracing::warn!(network_id = %id, "selected network unknown; rendering nothing");
            return;
        };

        egui::Frame::NONE
            .fill(theme::SURFACE)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("⬅").size(15.0)).frame(false))
                        .clicked()
                    {
                        events.push(NavEvent::Back);
                    }
                    ui.label(RichText::new("Network").size(11.0).color(theme::SUBTEXT));
                    ui.label(RichText::new(&network.name).strong());
                });
            });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("network_members_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        for member_id in &network.members {
                            if let Some(member) = self.store.person(member_id) {
                                if member_card(ui, member).clicked() {
                                    events.push(NavEvent::OpenPerson(member.id.clone()));
                                }
                                ui.add_space(8.0);
                            }
                        }
                    });
            });
    }

    // --- Placeholders -----------------------------------------------------

    fn show_calendar(&mut self, ui: &mut egui::Ui) {
        self.view_header(ui, "Calendar");
        show_placeholder_body(ui, "📅", "Calendar view coming soon");
    }

    fn show_places(&mut self, ui: &mut egui::Ui) {
        self.view_header(ui, "Places");
        show_placeholder_body(ui, "📍", "Places view coming soon");
    }

    // --- Sidebar drawer ---------------------------------------------------

    fn show_sidebar(&mut self, ui: &mut egui::Ui, events: &mut Vec<NavEvent>) {
        egui::TopBottomPanel::bottom("sidebar_account")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(6, 8)))
            .show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    accent_disc(ui, 28.0, "👤");
                    ui.vertical(|ui| {
                        ui.label(RichText::new("My Account").strong().size(12.0));
                        ui.label(
                            RichText::new("Settings & preferences")
                                .size(10.0)
                                .color(theme::SUBTEXT),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("⚙").color(theme::SUBTEXT));
                    });
                });
            });

        ui.horizontal(|ui| {
            ui.label(RichText::new("MomFog").strong().size(15.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(egui::Button::new(RichText::new("⬅").size(14.0)).frame(false))
                    .clicked()
                {
                    self.menu_open = false;
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("sidebar_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::CollapsingHeader::new("👥  People")
                    .default_open(false)
                    .show(ui, |ui| {
                        for person in self.store.people() {
                            if person_menu_row(ui, person).clicked() {
                                events.push(NavEvent::GoPeople);
                                self.menu_open = false;
                            }
                        }
                    });

                egui::CollapsingHeader::new("💼  Networks")
                    .default_open(false)
                    .show(ui, |ui| {
                        for network in &self.networks {
                            let badge = network.member_count().to_string();
                            if menu_row(ui, &network.name, Some(&badge)).clicked() {
                                events.push(NavEvent::OpenNetwork(network.id.clone()));
                                self.menu_open = false;
                            }
                        }
                    });

                egui::CollapsingHeader::new("💡  Ideas")
                    .default_open(false)
                    .show(ui, |ui| {
                        let _ = menu_row(ui, "AI triage for symptom calls", None);
                        let _ = menu_row(ui, "MomFog pilots for clinicians", None);
                    });

                egui::CollapsingHeader::new("🕘  Recent Activity")
                    .default_open(false)
                    .show(ui, |ui| {
                        activity_row(ui, "Today", "Added note to Craig Bunnell");
                        activity_row(ui, "Yesterday", "Viewed Dana-Farber network");
                    });

                ui.separator();
                if menu_row(ui, "📅  Calendar", None).clicked() {
                    events.push(NavEvent::GoCalendar);
                    self.menu_open = false;
                }
            });
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx, self.ui_scale);
            self.theme_applied = true;
        }

        let mut events: Vec<NavEvent> = Vec::new();

        show_bottom_nav(ctx, &mut events);

        egui::SidePanel::left("sidebar_drawer")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(
                egui::Frame::NONE
                    .fill(theme::SURFACE)
                    .inner_margin(egui::Margin::same(10)),
            )
            .show_animated(ctx, self.menu_open, |ui| {
                self.show_sidebar(ui, &mut events)
            });

        let view = self.router.view().clone();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG))
            .show(ctx, |ui| match &view {
                ViewState::Home => self.show_home(ui, &mut events),
                ViewState::People => self.show_people(ui, &mut events),
                ViewState::Person(id) => self.show_person(ui, &mut events, id),
                ViewState::Network(id) => self.show_network(ui, &mut events, id),
                ViewState::Networks => self.show_networks(ui, &mut events),
                ViewState::Calendar => self.show_calendar(ui),
                ViewState::Places => self.show_places(ui),
            });

        for event in events {
            self.handle_nav(event);
        }
    }
}

// --- View bodies ----------------------------------------------------------

fn show_person_details(ui: &mut egui::Ui, person: &Person) {
    egui::ScrollArea::vertical()
        .id_salt("person_details_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Frame::NONE
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        if let Some(org) = person.orgs.first() {
                            fact_row(ui, "💼", org);
                        }
                        if let Some(org) = person.orgs.get(1) {
                            fact_row(ui, "🎓", org);
                        }
                        fact_row(ui, "🏠", &person.coordinates.home);
                        fact_row(ui, "📍", &person.coordinates.work);
                        if !person.tags.is_empty() {
                            ui.add_space(6.0);
                            ui.horizontal_wrapped(|ui| {
                                for tag in &person.tags {
                                    tag_chip(ui, tag);
                                }
                            });
                        }
                    });
                    ui.add_space(10.0);

                    card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new("Notes")
                                .strong()
                                .size(12.0)
                                .color(theme::SUBTEXT),
                        );
                        ui.add_space(4.0);
                        for note in &person.notes {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("•").color(theme::SUBTEXT));
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(
                                            note.date.format("%b %-d, %Y").to_string(),
                                        )
                                        .size(10.0)
                                        .color(theme::SUBTEXT),
                                    );
                                    ui.label(RichText::new(&note.text).size(12.0));
                                    if !note.tags.is_empty() {
                                        ui.horizontal_wrapped(|ui| {
                                            for tag in &note.tags {
                                                tag_chip(ui, tag);
                                            }
                                        });
                                    }
                                });
                            });
                            ui.add_space(6.0);
                        }
                    });
                });
        });
}

fn show_knowledge_tree(ui: &mut egui::Ui, events: &mut Vec<NavEvent>, person: &Person) {
    let groups = derive::relation_groups(person);

    egui::ScrollArea::vertical()
        .id_salt("knowledge_tree_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Frame::NONE
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            egui::Frame::NONE
                                .fill(theme::ACCENT)
                                .corner_radius(egui::CornerRadius::same(10))
                                .inner_margin(egui::Margin::symmetric(12, 6))
                                .show(ui, |ui| {
                                    ui.label(
                                        RichText::new(&person.name)
                                            .strong()
                                            .color(theme::SURFACE),
                                    );
                                });
                            ui.label(
                                RichText::new(&person.primary_role)
                                    .size(10.0)
                                    .color(theme::SUBTEXT),
                            );
                        });
                        ui.add_space(10.0);

                        for group in &groups {
                            ui.label(
                                RichText::new(group.kind.to_uppercase())
                                    .size(10.0)
                                    .color(theme::SUBTEXT),
                            );
                            ui.add_space(4.0);
                            for (row_index, pair) in group.relations.chunks(2).enumerate() {
                                ui.columns(2, |columns| {
                                    for (col_index, relation) in pair.iter().enumerate() {
                                        let salt = format!(
                                            "rel-{}-{}-{}",
                                            group.kind, row_index, col_index
                                        );
                                        if relation_card(&mut columns[col_index], &salt, relation)
                                            .clicked()
                                        {
                                            events.push(NavEvent::OpenPerson(
                                                relation.person_id.clone(),
                                            ));
                                        }
                                    }
                                });
                                ui.add_space(6.0);
                            }
                            ui.add_space(6.0);
                        }
                    });
                });
        });
}

fn show_placeholder_body(ui: &mut egui::Ui, icon: &str, message: &str) {
    ui.add_space(ui.available_height() * 0.35);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(44.0).color(theme::SUBTEXT));
        ui.add_space(8.0);
        ui.label(RichText::new(message).size(12.0).color(theme::SUBTEXT));
    });
}

fn show_bottom_nav(ctx: &egui::Context, events: &mut Vec<NavEvent>) {
    egui::TopBottomPanel::bottom("bottom_nav")
        .frame(
            egui::Frame::NONE
                .fill(theme::SURFACE)
                .inner_margin(egui::Margin::symmetric(0, 6)),
        )
        .show(ctx, |ui| {
            let items: [(&str, &str, NavEvent); 4] = [
                ("🏠", "Home", NavEvent::GoHome),
                ("👥", "People", NavEvent::GoPeople),
                ("💼", "Networks", NavEvent::GoNetworks),
                ("📍", "Places", NavEvent::GoPlaces),
            ];
            ui.columns(4, |columns| {
                for ((icon, label, event), column) in items.into_iter().zip(columns.iter_mut()) {
                    column.vertical_centered(|ui| {
                        let text = RichText::new(format!("{icon}\n{label}"))
                            .size(11.0)
                            .color(theme::SUBTEXT);
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            events.push(event);
                        }
                    });
                }
            });
        });
}

// --- Widgets ---------------------------------------------------------------

fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::same(12))
}

fn clickable_card(
    ui: &mut egui::Ui,
    id_salt: &str,
    add: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    let inner = card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        add(ui);
    });
    ui.interact(
        inner.response.rect,
        ui.id().with(id_salt),
        egui::Sense::click(),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn person_card(ui: &mut egui::Ui, person: &Person) -> egui::Response {
    clickable_card(ui, person.id.as_str(), |ui| {
        ui.horizontal(|ui| {
            avatar_disc(ui, 40.0, &person.name);
            ui.vertical(|ui| {
                ui.label(RichText::new(&person.name).strong());
                ui.label(
                    RichText::new(&person.primary_role)
                        .size(11.0)
                        .color(theme::SUBTEXT),
                );
                if !person.tags.is_empty() {
                    ui.horizontal(|ui| {
                        for tag in person.tags.iter().take(3) {
                            tag_chip(ui, tag);
                        }
                    });
                }
            });
        });
    })
}

fn member_card(ui: &mut egui::Ui, person: &Person) -> egui::Response {
    clickable_card(ui, person.id.as_str(), |ui| {
        ui.horizontal(|ui| {
            avatar_disc(ui, 34.0, &person.name);
            ui.vertical(|ui| {
                ui.label(RichText::new(&person.name).strong().size(12.0));
                ui.label(
                    RichText::new(&person.primary_role)
                        .size(10.0)
                        .color(theme::SUBTEXT),
                );
            });
        });
    })
}

fn network_card(ui: &mut egui::Ui, network: &Network) -> egui::Response {
    clickable_card(ui, network.id.as_str(), |ui| {
        ui.horizontal(|ui| {
            accent_disc(ui, 40.0, "💼");
            ui.vertical(|ui| {
                ui.label(RichText::new(&network.name).strong());
                let count = network.member_count();
                let suffix = if count == 1 { "member" } else { "members" };
                ui.label(
                    RichText::new(format!("{count} {suffix}"))
                        .size(11.0)
                        .color(theme::SUBTEXT),
                );
            });
        });
    })
}

fn relation_card(ui: &mut egui::Ui, id_salt: &str, relation: &Relation) -> egui::Response {
    clickable_card(ui, id_salt, |ui| {
        ui.label(RichText::new("Open related").strong().size(12.0));
        ui.label(
            RichText::new(&relation.label)
                .size(10.0)
                .color(theme::SUBTEXT),
        );
    })
}

fn decorative_icon_button(icon: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(icon.to_string()).color(theme::SUBTEXT)).frame(false)
}

fn fact_row(ui: &mut egui::Ui, icon: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(12.0).color(theme::SUBTEXT));
        ui.label(RichText::new(value).size(12.0));
    });
}

fn tag_chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(theme::CHIP_BG)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(10.0).color(theme::TEXT));
        });
}

fn menu_row(ui: &mut egui::Ui, label: &str, badge: Option<&str>) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), MENU_ROW_HEIGHT),
        egui::Sense::click(),
    );
    let fill = if response.hovered() {
        theme::HOVER
    } else {
        egui::Color32::TRANSPARENT
    };
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(8), fill);
    ui.painter().text(
        rect.left_center() + egui::vec2(10.0, 0.0),
        egui::Align2::LEFT_CENTER,
        label,
        egui::TextStyle::Body.resolve(ui.style()),
        theme::TEXT,
    );
    if let Some(badge) = badge {
        ui.painter().text(
            rect.right_center() - egui::vec2(10.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            badge,
            egui::TextStyle::Small.resolve(ui.style()),
            theme::SUBTEXT,
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn person_menu_row(ui: &mut egui::Ui, person: &Person) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), MENU_ROW_HEIGHT + 4.0),
        egui::Sense::click(),
    );
    let fill = if response.hovered() {
        theme::HOVER
    } else {
        egui::Color32::TRANSPARENT
    };
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(8), fill);

    let disc_center = rect.left_center() + egui::vec2(18.0, 0.0);
    let radius = 10.0;
    ui.painter()
        .circle_filled(disc_center, radius, avatar_color(&person.name));
    ui.painter().text(
        disc_center,
        egui::Align2::CENTER_CENTER,
        initials(&person.name),
        egui::FontId::proportional(8.0),
        theme::SURFACE,
    );
    ui.painter().text(
        rect.left_center() + egui::vec2(36.0, 0.0),
        egui::Align2::LEFT_CENTER,
        &person.name,
        egui::TextStyle::Body.resolve(ui.style()),
        theme::TEXT,
    );
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn activity_row(ui: &mut egui::Ui, when: &str, what: &str) {
    egui::Frame::NONE
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(when).size(10.0).color(theme::SUBTEXT));
            ui.label(RichText::new(what).size(12.0));
        });
}

fn avatar_disc(ui: &mut egui::Ui, diameter: f32, name: &str) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, avatar_color(name));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::proportional(diameter * 0.38),
        theme::SURFACE,
    );
}

fn accent_disc(ui: &mut egui::Ui, diameter: f32, glyph: &str) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, theme::ACCENT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(diameter * 0.45),
        theme::SURFACE,
    );
}

fn draw_logo_mark(ui: &mut egui::Ui, diameter: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, theme::ACCENT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "M",
        egui::FontId::proportional(diameter * 0.5),
        theme::SURFACE,
    );
}

/// Two-letter initials from the first alphanumeric-leading words of a name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|ch| ch.is_alphanumeric())
        .take(2)
        .flat_map(|ch| ch.to_uppercase())
        .collect()
}

fn avatar_color(name: &str) -> egui::Color32 {
    const DISC_COLORS: [egui::Color32; 6] = [
        egui::Color32::from_rgb(0xc9, 0x9a, 0x6b),
        egui::Color32::from_rgb(0x8f, 0xae, 0x92),
        egui::Color32::from_rgb(0x9a, 0x8f, 0xc2),
        egui::Color32::from_rgb(0xc2, 0x8f, 0x8f),
        egui::Color32::from_rgb(0x8f, 0xa9, 0xc2),
        egui::Color32::from_rgb(0xc2, 0xb1, 0x8f),
    ];
    let hash = name
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize));
    DISC_COLORS[hash % DISC_COLORS.len()]
}

fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    }
}

#[cfg(test)]
mod tests {
    use super::{avatar_color, greeting_for_hour, initials, PeopleScope};

    #[test]
    fn builds_initials_from_leading_alphanumeric_words() {
        assert_eq!(initials("Craig Bunnell, MD, MPH, MBA"), "CB");
        assert_eq!(initials("Katherine U., RN, MSN"), "KU");
        // Parenthesized words contribute nothing.
        assert_eq!(initials("Spouse (placeholder)"), "S");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn avatar_colors_are_deterministic_per_name() {
        assert_eq!(avatar_color("Craig"), avatar_color("Craig"));
    }

    #[test]
    fn greets_by_local_time_of_day() {
        assert_eq!(greeting_for_hour(4), "evening");
        assert_eq!(greeting_for_hour(5), "morning");
        assert_eq!(greeting_for_hour(11), "morning");
        assert_eq!(greeting_for_hour(12), "afternoon");
        assert_eq!(greeting_for_hour(17), "afternoon");
        assert_eq!(greeting_for_hour(18), "evening");
        assert_eq!(greeting_for_hour(23), "evening");
    }

    #[test]
    fn scope_options_match_the_mock() {
        let labels: Vec<&str> = PeopleScope::ALL.iter().map(|scope| scope.label()).collect();
        assert_eq!(
            labels,
            ["All People", "Recent", "Favorites", "By Organization"]
        );
    }
}
