// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! English (en) catalog table.

pub(crate) const ENTRIES: &[(&str, &str)] = &[
	("app.name", "Gold Shop Manager"),
	("app.tagline", "Inventory, invoicing and accounting for jewelers"),
	("app.loading", "Loading..."),
	("app.version", "Version {version}"),
	("nav.dashboard", "Dashboard"),
	("nav.inventory", "Inventory"),
	("nav.invoices", "Invoices"),
	("nav.customers", "Customers"),
	("nav.accounting", "Accounting"),
	("nav.sms", "SMS"),
	("nav.reports", "Reports"),
	("nav.settings", "Settings"),
	("nav.roles", "Roles & Permissions"),
	("nav.users", "Users"),
	("nav.cache", "Cache Management"),
	("nav.logout", "Log out"),
	("nav.home", "Home"),
	("nav.back", "Back"),
	("nav.menu", "Menu"),
	("common.save", "Save"),
	("common.cancel", "Cancel"),
	("common.delete", "Delete"),
	("common.edit", "Edit"),
	("common.add", "Add"),
	("common.create", "Create"),
	("common.update", "Update"),
	("common.search", "Search"),
	("common.filter", "Filter"),
	("common.clear", "Clear"),
	("common.reset", "Reset"),
	("common.close", "Close"),
	("common.confirm", "Confirm"),
	("common.yes", "Yes"),
	("common.no", "No"),
	("common.actions", "Actions"),
	("common.status", "Status"),
	("common.active", "Active"),
	("common.inactive", "Inactive"),
	("common.date", "Date"),
	("common.from", "From"),
	("common.to", "To"),
	("common.total", "Total"),
	("common.amount", "Amount"),
	("common.description", "Description"),
	("common.name", "Name"),
	("common.phone", "Phone"),
	("common.email", "Email"),
	("common.address", "Address"),
	("common.notes", "Notes"),
	("common.export", "Export"),
	("common.import", "Import"),
	("common.print", "Print"),
	("common.refresh", "Refresh"),
	("common.details", "Details"),
	("common.view", "View"),
	("common.select", "Select"),
	("common.all", "All"),
	("common.none", "None"),
	("common.loading", "Loading..."),
	("common.no_data", "No data available"),
	("common.error", "An error occurred"),
	("common.success", "Operation completed successfully"),
	("common.required", "This field is required"),
	("common.previous", "Previous"),
	("common.next", "Next"),
	("common.page_of", "Page {page} of {pages}"),
	("common.items_selected", "{count} items selected"),
	("common.confirm_delete", "Are you sure you want to delete this item?"),
	("common.currency", "Toman"),
	("common.weight_grams", "{weight} g"),
	("auth.login", "Log in"),
	("auth.username", "Username"),
	("auth.password", "Password"),
	("auth.remember_me", "Remember me"),
	("auth.forgot_password", "Forgot password?"),
	("auth.invalid_credentials", "Invalid username or password"),
	("auth.session_expired", "Your session has expired. Please log in again."),
	("auth.tenant", "Shop"),
	("auth.select_tenant", "Select a shop"),
	("auth.welcome", "Welcome, {name}"),
	("dashboard.title", "Dashboard"),
	("dashboard.today_sales", "Today's sales"),
	("dashboard.monthly_sales", "Monthly sales"),
	("dashboard.gold_price", "Gold price (18k)"),
	("dashboard.inventory_value", "Inventory value"),
	("dashboard.low_stock", "Low stock items"),
	("dashboard.recent_invoices", "Recent invoices"),
	("dashboard.top_customers", "Top customers"),
	("dashboard.pending_payments", "Pending payments"),
	("dashboard.quick_actions", "Quick actions"),
	("inventory.title", "Inventory"),
	("inventory.add_item", "Add item"),
	("inventory.edit_item", "Edit item"),
	("inventory.item_code", "Item code"),
	("inventory.item_name", "Item name"),
	("inventory.category", "Category"),
	("inventory.karat", "Karat"),
	("inventory.weight", "Weight"),
	("inventory.wage", "Making charge"),
	("inventory.stone_weight", "Stone weight"),
	("inventory.quantity", "Quantity"),
	("inventory.in_stock", "In stock"),
	("inventory.out_of_stock", "Out of stock"),
	("inventory.barcode", "Barcode"),
	("inventory.supplier", "Supplier"),
	("inventory.location", "Location"),
	("inventory.bulk_operations", "Bulk operations"),
	("inventory.bulk_update_price", "Update prices"),
	("inventory.bulk_move", "Move items"),
	("inventory.universal_search", "Search by code, name or barcode"),
	("inventory.stock_movement", "Stock movement"),
	("inventory.categories.rings", "Rings"),
	("inventory.categories.necklaces", "Necklaces"),
	("inventory.categories.bracelets", "Bracelets"),
	("inventory.categories.earrings", "Earrings"),
	("inventory.categories.coins", "Coins"),
	("inventory.categories.bullion", "Bullion"),
	("inventory.saved", "Item saved"),
	("inventory.deleted", "Item deleted"),
	("invoices.title", "Invoices"),
	("invoices.new", "New invoice"),
	("invoices.number", "Invoice number"),
	("invoices.customer", "Customer"),
	("invoices.issue_date", "Issue date"),
	("invoices.due_date", "Due date"),
	("invoices.subtotal", "Subtotal"),
	("invoices.tax", "Tax"),
	("invoices.discount", "Discount"),
	("invoices.grand_total", "Grand total"),
	("invoices.paid", "Paid"),
	("invoices.unpaid", "Unpaid"),
	("invoices.partially_paid", "Partially paid"),
	("invoices.draft", "Draft"),
	("invoices.cancelled", "Cancelled"),
	("invoices.line_items", "Line items"),
	("invoices.add_line", "Add line"),
	("invoices.payment_method", "Payment method"),
	("invoices.cash", "Cash"),
	("invoices.card", "Card"),
	("invoices.installments", "Installments"),
	("invoices.print_invoice", "Print invoice"),
	("invoices.created", "Invoice {number} created"),
	("customers.title", "Customers"),
	("customers.add", "Add customer"),
	("customers.national_id", "National ID"),
	("customers.balance", "Balance"),
	("customers.purchase_history", "Purchase history"),
	("customers.tags", "Tags"),
	("customers.birthday", "Birthday"),
	("customers.debtor", "Debtor"),
	("customers.creditor", "Creditor"),
	("accounting.title", "Accounting"),
	("accounting.chart_of_accounts", "Chart of accounts"),
	("accounting.journal_entries", "Journal entries"),
	("accounting.new_entry", "New journal entry"),
	("accounting.ledger", "General ledger"),
	("accounting.debit", "Debit"),
	("accounting.credit", "Credit"),
	("accounting.balance", "Balance"),
	("accounting.account", "Account"),
	("accounting.account_code", "Account code"),
	("accounting.trial_balance", "Trial balance"),
	("accounting.balance_sheet", "Balance sheet"),
	("accounting.income_statement", "Income statement"),
	("accounting.unbalanced_entry", "Debits and credits must be equal"),
	("accounting.posted", "Posted"),
	("accounting.cheques", "Cheques"),
	("accounting.bank_accounts", "Bank accounts"),
	("accounting.fiscal_year", "Fiscal year"),
	("sms.title", "SMS Campaigns"),
	("sms.new_campaign", "New campaign"),
	("sms.message", "Message"),
	("sms.recipients", "Recipients"),
	("sms.send", "Send"),
	("sms.schedule", "Schedule"),
	("sms.templates", "Templates"),
	("sms.sent", "Sent"),
	("sms.failed", "Failed"),
	("sms.pending", "Pending"),
	("sms.credit", "SMS credit"),
	("sms.character_count", "{count} characters"),
	("sms.birthday_greeting", "Birthday greeting"),
	("sms.history", "Sending history"),
	("rbac.title", "Roles & Permissions"),
	("rbac.roles", "Roles"),
	("rbac.permissions", "Permissions"),
	("rbac.new_role", "New role"),
	("rbac.role_name", "Role name"),
	("rbac.assign_role", "Assign role"),
	("rbac.users", "Users"),
	("rbac.new_user", "New user"),
	("rbac.permission_denied", "You do not have permission to perform this action"),
	("rbac.read", "Read"),
	("rbac.write", "Write"),
	("rbac.manage", "Manage"),
	("rbac.admin", "Administrator"),
	("rbac.system_role", "System role"),
	("reports.title", "Reports"),
	("reports.sales", "Sales report"),
	("reports.inventory", "Inventory report"),
	("reports.profit_loss", "Profit and loss"),
	("reports.customers", "Customer report"),
	("reports.period", "Period"),
	("reports.daily", "Daily"),
	("reports.weekly", "Weekly"),
	("reports.monthly", "Monthly"),
	("reports.yearly", "Yearly"),
	("reports.generate", "Generate report"),
	("reports.analytics", "Analytics"),
	("reports.chart", "Chart"),
	("reports.download_pdf", "Download PDF"),
	("reports.download_excel", "Download Excel"),
	("settings.title", "Settings"),
	("settings.general", "General"),
	("settings.language", "Language"),
	("settings.theme", "Theme"),
	("settings.theme_light", "Light"),
	("settings.theme_dark", "Dark"),
	("settings.company", "Company information"),
	("settings.gold_price_source", "Gold price source"),
	("settings.tax_rate", "Tax rate"),
	("settings.calendar", "Calendar"),
	("settings.calendar_jalali", "Solar Hijri"),
	("settings.calendar_gregorian", "Gregorian"),
	("settings.notifications", "Notifications"),
	("settings.backup", "Backup"),
	("settings.saved", "Settings saved"),
	("cache.title", "Cache Management"),
	("cache.keys", "Cached keys"),
	("cache.clear_all", "Clear all cache"),
	("cache.clear_confirm", "Clear all cached data?"),
	("cache.memory_usage", "Memory usage"),
	("cache.hit_rate", "Hit rate"),
	("cache.connected", "Connected"),
	("cache.disconnected", "Disconnected"),
	("cache.ttl", "Time to live"),
	("cache.cleared", "Cache cleared"),
	("language.english", "English"),
	("language.persian", "Persian"),
	("language.arabic", "Arabic"),
	("language.select", "Select language"),
	("language.changed", "Language changed to {language}"),
];
