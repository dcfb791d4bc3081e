// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persian (fa) catalog table.

pub(crate) const ENTRIES: &[(&str, &str)] = &[
	("app.name", "مدیریت طلافروشی"),
	("app.tagline", "انبار، فاکتور و حسابداری برای طلافروشان"),
	("app.loading", "در حال بارگذاری..."),
	("app.version", "نسخه {version}"),
	("nav.dashboard", "داشبورد"),
	("nav.inventory", "انبار"),
	("nav.invoices", "فاکتورها"),
	("nav.customers", "مشتریان"),
	("nav.accounting", "حسابداری"),
	("nav.sms", "پیامک"),
	("nav.reports", "گزارش‌ها"),
	("nav.settings", "تنظیمات"),
	("nav.roles", "نقش‌ها و دسترسی‌ها"),
	("nav.users", "کاربران"),
	("nav.cache", "مدیریت کش"),
	("nav.logout", "خروج"),
	("nav.home", "خانه"),
	("nav.back", "بازگشت"),
	("nav.menu", "منو"),
	("common.save", "ذخیره"),
	("common.cancel", "انصراف"),
	("common.delete", "حذف"),
	("common.edit", "ویرایش"),
	("common.add", "افزودن"),
	("common.create", "ایجاد"),
	("common.update", "به‌روزرسانی"),
	("common.search", "جستجو"),
	("common.filter", "فیلتر"),
	("common.clear", "پاک کردن"),
	("common.reset", "بازنشانی"),
	("common.close", "بستن"),
	("common.confirm", "تأیید"),
	("common.yes", "بله"),
	("common.no", "خیر"),
	("common.actions", "عملیات"),
	("common.status", "وضعیت"),
	("common.active", "فعال"),
	("common.inactive", "غیرفعال"),
	("common.date", "تاریخ"),
	("common.from", "از"),
	("common.to", "تا"),
	("common.total", "جمع کل"),
	("common.amount", "مبلغ"),
	("common.description", "توضیحات"),
	("common.name", "نام"),
	("common.phone", "تلفن"),
	("common.email", "ایمیل"),
	("common.address", "آدرس"),
	("common.notes", "یادداشت‌ها"),
	("common.export", "خروجی"),
	("common.import", "ورودی"),
	("common.print", "چاپ"),
	("common.refresh", "بارگذاری مجدد"),
	("common.details", "جزئیات"),
	("common.view", "مشاهده"),
	("common.select", "انتخاب"),
	("common.all", "همه"),
	("common.none", "هیچ‌کدام"),
	("common.loading", "در حال بارگذاری..."),
	("common.no_data", "داده‌ای موجود نیست"),
	("common.error", "خطایی رخ داد"),
	("common.success", "عملیات با موفقیت انجام شد"),
	("common.required", "این فیلد الزامی است"),
	("common.previous", "قبلی"),
	("common.next", "بعدی"),
	("common.page_of", "صفحه {page} از {pages}"),
	("common.items_selected", "{count} مورد انتخاب شد"),
	("common.confirm_delete", "آیا از حذف این مورد اطمینان دارید؟"),
	("common.currency", "تومان"),
	("common.weight_grams", "{weight} گرم"),
	("auth.login", "ورود"),
	("auth.username", "نام کاربری"),
	("auth.password", "رمز عبور"),
	("auth.remember_me", "مرا به خاطر بسپار"),
	("auth.forgot_password", "رمز عبور را فراموش کرده‌اید؟"),
	("auth.invalid_credentials", "نام کاربری یا رمز عبور نادرست است"),
	("auth.session_expired", "نشست شما منقضی شده است. لطفاً دوباره وارد شوید."),
	("auth.tenant", "فروشگاه"),
	("auth.select_tenant", "انتخاب فروشگاه"),
	("auth.welcome", "{name}، خوش آمدید"),
	("dashboard.title", "داشبورد"),
	("dashboard.today_sales", "فروش امروز"),
	("dashboard.monthly_sales", "فروش ماهانه"),
	("dashboard.gold_price", "قیمت طلا (۱۸ عیار)"),
	("dashboard.inventory_value", "ارزش موجودی"),
	("dashboard.low_stock", "کالاهای رو به اتمام"),
	("dashboard.recent_invoices", "فاکتورهای اخیر"),
	("dashboard.top_customers", "مشتریان برتر"),
	("dashboard.pending_payments", "پرداخت‌های معوق"),
	("dashboard.quick_actions", "دسترسی سریع"),
	("inventory.title", "انبار"),
	("inventory.add_item", "افزودن کالا"),
	("inventory.edit_item", "ویرایش کالا"),
	("inventory.item_code", "کد کالا"),
	("inventory.item_name", "نام کالا"),
	("inventory.category", "دسته‌بندی"),
	("inventory.karat", "عیار"),
	("inventory.weight", "وزن"),
	("inventory.wage", "اجرت"),
	("inventory.stone_weight", "وزن سنگ"),
	("inventory.quantity", "تعداد"),
	("inventory.in_stock", "موجود"),
	("inventory.out_of_stock", "ناموجود"),
	("inventory.barcode", "بارکد"),
	("inventory.supplier", "تأمین‌کننده"),
	("inventory.location", "محل نگهداری"),
	("inventory.bulk_operations", "عملیات گروهی"),
	("inventory.bulk_update_price", "به‌روزرسانی قیمت‌ها"),
	("inventory.bulk_move", "انتقال کالاها"),
	("inventory.universal_search", "جستجو بر اساس کد، نام یا بارکد"),
	("inventory.stock_movement", "گردش موجودی"),
	("inventory.categories.rings", "انگشتر"),
	("inventory.categories.necklaces", "گردنبند"),
	("inventory.categories.bracelets", "دستبند"),
	("inventory.categories.earrings", "گوشواره"),
	("inventory.categories.coins", "سکه"),
	("inventory.categories.bullion", "شمش"),
	("inventory.saved", "کالا ذخیره شد"),
	("inventory.deleted", "کالا حذف شد"),
	("invoices.title", "فاکتورها"),
	("invoices.new", "فاکتور جدید"),
	("invoices.number", "شماره فاکتور"),
	("invoices.customer", "مشتری"),
	("invoices.issue_date", "تاریخ صدور"),
	("invoices.due_date", "سررسید"),
	("invoices.subtotal", "جمع جزء"),
	("invoices.tax", "مالیات"),
	("invoices.discount", "تخفیف"),
	("invoices.grand_total", "مبلغ نهایی"),
	("invoices.paid", "پرداخت شده"),
	("invoices.unpaid", "پرداخت نشده"),
	("invoices.partially_paid", "پرداخت جزئی"),
	("invoices.draft", "پیش‌نویس"),
	("invoices.cancelled", "لغو شده"),
	("invoices.line_items", "اقلام فاکتور"),
	("invoices.add_line", "افزودن ردیف"),
	("invoices.payment_method", "روش پرداخت"),
	("invoices.cash", "نقدی"),
	("invoices.card", "کارت"),
	("invoices.installments", "اقساط"),
	("invoices.print_invoice", "چاپ فاکتور"),
	("invoices.created", "فاکتور {number} ایجاد شد"),
	("customers.title", "مشتریان"),
	("customers.add", "افزودن مشتری"),
	("customers.national_id", "کد ملی"),
	("customers.balance", "مانده حساب"),
	("customers.purchase_history", "سابقه خرید"),
	("customers.tags", "برچسب‌ها"),
	("customers.birthday", "تاریخ تولد"),
	("customers.debtor", "بدهکار"),
	("customers.creditor", "بستانکار"),
	("accounting.title", "حسابداری"),
	("accounting.chart_of_accounts", "سرفصل حساب‌ها"),
	("accounting.journal_entries", "اسناد حسابداری"),
	("accounting.new_entry", "سند جدید"),
	("accounting.ledger", "دفتر کل"),
	("accounting.debit", "بدهکار"),
	("accounting.credit", "بستانکار"),
	("accounting.balance", "مانده"),
	("accounting.account", "حساب"),
	("accounting.account_code", "کد حساب"),
	("accounting.trial_balance", "تراز آزمایشی"),
	("accounting.balance_sheet", "ترازنامه"),
	("accounting.income_statement", "صورت سود و زیان"),
	("accounting.unbalanced_entry", "جمع بدهکار و بستانکار باید برابر باشد"),
	("accounting.posted", "ثبت قطعی"),
	("accounting.cheques", "چک‌ها"),
	("accounting.bank_accounts", "حساب‌های بانکی"),
	("accounting.fiscal_year", "سال مالی"),
	("sms.title", "کمپین‌های پیامکی"),
	("sms.new_campaign", "کمپین جدید"),
	("sms.message", "متن پیام"),
	("sms.recipients", "گیرندگان"),
	("sms.send", "ارسال"),
	("sms.schedule", "زمان‌بندی"),
	("sms.templates", "قالب‌ها"),
	("sms.sent", "ارسال شده"),
	("sms.failed", "ناموفق"),
	("sms.pending", "در انتظار"),
	("sms.credit", "اعتبار پیامک"),
	("sms.character_count", "{count} کاراکتر"),
	("sms.birthday_greeting", "تبریک تولد"),
	("sms.history", "تاریخچه ارسال"),
	("rbac.title", "نقش‌ها و دسترسی‌ها"),
	("rbac.roles", "نقش‌ها"),
	("rbac.permissions", "دسترسی‌ها"),
	("rbac.new_role", "نقش جدید"),
	("rbac.role_name", "نام نقش"),
	("rbac.assign_role", "تخصیص نقش"),
	("rbac.users", "کاربران"),
	("rbac.new_user", "کاربر جدید"),
	("rbac.permission_denied", "شما اجازه انجام این عملیات را ندارید"),
	("rbac.read", "مشاهده"),
	("rbac.write", "ویرایش"),
	("rbac.manage", "مدیریت"),
	("rbac.admin", "مدیر سیستم"),
	("rbac.system_role", "نقش سیستمی"),
	("reports.title", "گزارش‌ها"),
	("reports.sales", "گزارش فروش"),
	("reports.inventory", "گزارش موجودی"),
	("reports.profit_loss", "سود و زیان"),
	("reports.customers", "گزارش مشتریان"),
	("reports.period", "بازه زمانی"),
	("reports.daily", "روزانه"),
	("reports.weekly", "هفتگی"),
	("reports.monthly", "ماهانه"),
	("reports.yearly", "سالانه"),
	("reports.generate", "تهیه گزارش"),
	("reports.analytics", "تحلیل‌ها"),
	("reports.chart", "نمودار"),
	("reports.download_pdf", "دانلود PDF"),
	("reports.download_excel", "دانلود اکسل"),
	("settings.title", "تنظیمات"),
	("settings.general", "عمومی"),
	("settings.language", "زبان"),
	("settings.theme", "پوسته"),
	("settings.theme_light", "روشن"),
	("settings.theme_dark", "تیره"),
	("settings.company", "اطلاعات شرکت"),
	("settings.gold_price_source", "منبع قیمت طلا"),
	("settings.tax_rate", "نرخ مالیات"),
	("settings.calendar", "تقویم"),
	("settings.calendar_jalali", "شمسی"),
	("settings.calendar_gregorian", "میلادی"),
	("settings.notifications", "اعلان‌ها"),
	("settings.backup", "پشتیبان‌گیری"),
	("settings.saved", "تنظیمات ذخیره شد"),
	("cache.title", "مدیریت کش"),
	("cache.keys", "کلیدهای کش"),
	("cache.clear_all", "پاک کردن کل کش"),
	("cache.clear_confirm", "همه داده‌های کش پاک شود؟"),
	("cache.memory_usage", "مصرف حافظه"),
	("cache.hit_rate", "نرخ برخورد"),
	("cache.connected", "متصل"),
	("cache.disconnected", "قطع"),
	("cache.ttl", "مدت اعتبار"),
	("cache.cleared", "کش پاک شد"),
	("language.english", "انگلیسی"),
	("language.persian", "فارسی"),
	("language.arabic", "عربی"),
	("language.select", "انتخاب زبان"),
	("language.changed", "زبان به {language} تغییر کرد"),
];
